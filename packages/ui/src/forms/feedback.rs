use api::{Api, ApiError, Feedback, FeedbackPayload, Transport};

use super::validate::required;
use super::{message_of, DialogMode, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackForm {
    pub description: String,
    pub is_anonymous: bool,
}

impl EntityForm for FeedbackForm {
    type Seed = Feedback;
    type Payload = FeedbackPayload;

    const NAME: &'static str = "feedback";

    fn from_seed(seed: &Feedback) -> Self {
        Self {
            description: seed.description.clone(),
            is_anonymous: seed.is_anonymous,
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "description", &self.description);
        errors
    }

    fn payload(&self, mode: &DialogMode) -> FeedbackPayload {
        FeedbackPayload {
            id: mode.id().map(String::from),
            description: self.description.trim().to_string(),
            is_anonymous: self.is_anonymous,
        }
    }

    async fn submit<T: Transport>(
        api: &Api<T>,
        mode: &DialogMode,
        payload: &FeedbackPayload,
    ) -> Result<Option<String>, ApiError> {
        match mode {
            DialogMode::Create => message_of(api.create_feedback(payload).await),
            DialogMode::Edit { .. } => message_of(api.update_feedback(payload).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::testing::MockTransport;
    use api::Method;
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::forms::{save, DialogState, SaveOutcome};

    #[tokio::test]
    async fn test_empty_description_sends_nothing() {
        let transport = MockTransport::new();
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<FeedbackForm>::create();
        state.edit_field("description", |f| f.description = "   ".into());

        let outcome = save(&mut state, &api, || async {}).await;
        assert!(matches!(outcome, SaveOutcome::Invalid(ref e) if e.has("description")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_edit_sends_put_with_id() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Put, "/feedback", json!(null));
        transport.respond_ok(Method::Get, "/feedback", json!([]));
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));

        let seed = Feedback {
            id: "f1".into(),
            description: "Helpful review".into(),
            is_anonymous: false,
            user: None,
        };
        let mut state = DialogState::<FeedbackForm>::edit("f1", &seed);
        assert_eq!(state.fields, FeedbackForm::from_seed(&seed));
        state.edit_field("is_anonymous", |f| f.is_anonymous = true);

        let api_ref = &api;
        let outcome = save(&mut state, &api, move || async move {
            let _ = api_ref.feedback().await;
        })
        .await;

        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        assert!(!state.open);
        let put = &transport.requests()[0];
        assert_eq!(
            put.body,
            Some(json!({"id": "f1", "description": "Helpful review", "isAnonymous": true}))
        );
        assert_eq!(transport.count(Method::Get, "/feedback"), 1);
    }
}
