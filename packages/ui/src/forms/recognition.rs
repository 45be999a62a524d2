use api::{Api, ApiError, Recognition, RecognitionPayload, Transport};

use super::validate::required;
use super::{message_of, DialogMode, EntityForm, FieldErrors};

/// `to_user` and `company_value` hold ids picked from the directory and the
/// value catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionForm {
    pub to_user: String,
    pub company_value: String,
    pub description: String,
}

impl EntityForm for RecognitionForm {
    type Seed = Recognition;
    type Payload = RecognitionPayload;

    const NAME: &'static str = "recognition";

    fn from_seed(seed: &Recognition) -> Self {
        Self {
            to_user: seed.recipient_id().to_string(),
            company_value: seed.company_value.id().to_string(),
            description: seed.description.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "toUser", &self.to_user);
        required(&mut errors, "companyValue", &self.company_value);
        required(&mut errors, "description", &self.description);
        errors
    }

    fn payload(&self, mode: &DialogMode) -> RecognitionPayload {
        RecognitionPayload {
            id: mode.id().map(String::from),
            to_user: self.to_user.clone(),
            company_value: self.company_value.clone(),
            description: self.description.trim().to_string(),
        }
    }

    async fn submit<T: Transport>(
        api: &Api<T>,
        mode: &DialogMode,
        payload: &RecognitionPayload,
    ) -> Result<Option<String>, ApiError> {
        match mode {
            DialogMode::Create => message_of(api.create_recognition(payload).await),
            DialogMode::Edit { .. } => message_of(api.update_recognition(payload).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::testing::MockTransport;
    use api::{CompanyValue, Method, Ref, UserSummary};
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::forms::{save, DialogState, SaveOutcome};

    #[test]
    fn test_seed_takes_ids_from_populated_references() {
        let seed = Recognition {
            id: "r1".into(),
            from_user: Ref::Id("u1".into()),
            to_user: Ref::Populated(UserSummary {
                id: "u2".into(),
                first_name: "Grace".into(),
                ..Default::default()
            }),
            company_value: Ref::Populated(CompanyValue {
                id: "v1".into(),
                title: "Candor".into(),
                description: String::new(),
            }),
            description: "Clear write-up".into(),
        };
        let state = DialogState::<RecognitionForm>::edit("r1", &seed);
        assert_eq!(state.fields.to_user, "u2");
        assert_eq!(state.fields.company_value, "v1");
    }

    #[test]
    fn test_all_fields_required() {
        let errors = RecognitionForm::default().validate();
        assert_eq!(errors.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_value_sends_nothing() {
        let transport = MockTransport::new();
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<RecognitionForm>::create();
        state.edit_field("toUser", |f| f.to_user = "u2".into());
        state.edit_field("description", |f| f.description = "Great pairing".into());

        let outcome = save(&mut state, &api, || async {}).await;
        assert!(matches!(outcome, SaveOutcome::Invalid(ref e) if e.has("companyValue")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_then_refreshes_once() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Post, "/recognition", json!(null));
        transport.respond_ok(Method::Get, "/recognition", json!([]));
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<RecognitionForm>::create();
        state.edit_field("toUser", |f| f.to_user = "u2".into());
        state.edit_field("companyValue", |f| f.company_value = "v1".into());
        state.edit_field("description", |f| f.description = " Great pairing ".into());

        let api_ref = &api;
        let outcome = save(&mut state, &api, move || async move {
            let _ = api_ref.recognitions().await;
        })
        .await;

        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        assert!(!state.open);
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "/recognition".to_string()),
                (Method::Get, "/recognition".to_string())
            ]
        );
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"toUser": "u2", "companyValue": "v1", "description": "Great pairing"}))
        );
    }
}
