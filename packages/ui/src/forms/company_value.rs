use api::{Api, ApiError, CompanyValue, CompanyValuePayload, Transport};

use super::validate::required;
use super::{message_of, DialogMode, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyValueForm {
    pub title: String,
    pub description: String,
}

impl EntityForm for CompanyValueForm {
    type Seed = CompanyValue;
    type Payload = CompanyValuePayload;

    const NAME: &'static str = "company value";

    fn from_seed(seed: &CompanyValue) -> Self {
        Self {
            title: seed.title.clone(),
            description: seed.description.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "title", &self.title);
        required(&mut errors, "description", &self.description);
        errors
    }

    fn payload(&self, mode: &DialogMode) -> CompanyValuePayload {
        CompanyValuePayload {
            id: mode.id().map(String::from),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    async fn submit<T: Transport>(
        api: &Api<T>,
        mode: &DialogMode,
        payload: &CompanyValuePayload,
    ) -> Result<Option<String>, ApiError> {
        match mode {
            DialogMode::Create => message_of(api.create_company_value(payload).await),
            DialogMode::Edit { .. } => message_of(api.update_company_value(payload).await),
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

    fn candor() -> CompanyValue {
        CompanyValue {
            id: "v1".into(),
            title: "Candor".into(),
            description: "Say the hard thing kindly".into(),
        }
    }

    #[test]
    fn test_both_fields_required() {
        let errors = CompanyValueForm::default().validate();
        assert!(errors.has("title"));
        assert!(errors.has("description"));
    }

    #[test]
    fn test_edit_starts_from_record() {
        let state = DialogState::<CompanyValueForm>::edit("v1", &candor());
        assert_eq!(state.fields.title, "Candor");
        assert_eq!(state.fields.description, "Say the hard thing kindly");
        assert!(state.errors.is_empty());
    }

    #[tokio::test]
    async fn test_empty_title_sends_nothing() {
        let transport = MockTransport::new();
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<CompanyValueForm>::edit("v1", &candor());
        state.edit_field("title", |f| f.title.clear());

        let mut refreshed = 0;
        let outcome = save(&mut state, &api, || {
            refreshed += 1;
            async {}
        })
        .await;

        assert!(matches!(outcome, SaveOutcome::Invalid(ref e) if e.has("title")));
        assert!(transport.requests().is_empty());
        assert_eq!(refreshed, 0);
        assert!(state.open);
    }

    #[tokio::test]
    async fn test_edit_puts_with_id_then_refreshes_once() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Put, "/company-values", json!(null));
        transport.respond_ok(Method::Get, "/company-values", json!([]));
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<CompanyValueForm>::edit("v1", &candor());
        state.edit_field("title", |f| f.title = "Radical candor".into());

        let api_ref = &api;
        let outcome = save(&mut state, &api, move || async move {
            let _ = api_ref.company_values().await;
        })
        .await;

        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        assert!(!state.open);
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({
                "id": "v1",
                "title": "Radical candor",
                "description": "Say the hard thing kindly"
            }))
        );
        assert_eq!(transport.count(Method::Get, "/company-values"), 1);
    }
}
