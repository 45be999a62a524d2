use api::{Api, ApiError, Transport, Worklog, WorklogPayload};

use super::validate::{date, date_part, number_text, parse_positive, positive_number, required};
use super::{message_of, DialogMode, EntityForm, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorklogForm {
    pub service_date: String,
    pub hours: String,
    pub notes: String,
}

impl EntityForm for WorklogForm {
    type Seed = Worklog;
    type Payload = WorklogPayload;

    const NAME: &'static str = "worklog";

    fn from_seed(seed: &Worklog) -> Self {
        Self {
            service_date: date_part(&seed.service_date),
            hours: number_text(seed.hours),
            notes: seed.notes.clone(),
        }
    }

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        date(&mut errors, "serviceDate", &self.service_date);
        positive_number(&mut errors, "hours", &self.hours);
        required(&mut errors, "notes", &self.notes);
        errors
    }

    fn payload(&self, mode: &DialogMode) -> WorklogPayload {
        WorklogPayload {
            id: mode.id().map(String::from),
            service_date: self.service_date.trim().to_string(),
            hours: parse_positive(&self.hours).unwrap_or_default(),
            notes: self.notes.trim().to_string(),
        }
    }

    async fn submit<T: Transport>(
        api: &Api<T>,
        mode: &DialogMode,
        payload: &WorklogPayload,
    ) -> Result<Option<String>, ApiError> {
        match mode {
            DialogMode::Create => message_of(api.create_worklog(payload).await),
            DialogMode::Edit { .. } => message_of(api.update_worklog(payload).await),
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
    use crate::list::ListState;

    #[tokio::test]
    async fn test_create_posts_then_refreshes_once() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Post, "/worklog", json!(null));
        transport.respond_ok(
            Method::Get,
            "/worklog",
            json!([{"_id": "w1", "serviceDate": "2024-01-05", "hours": 8, "notes": "Deployed release"}]),
        );
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));

        let mut state = DialogState::<WorklogForm>::create();
        state.edit_field("serviceDate", |f| f.service_date = "2024-01-05".into());
        state.edit_field("hours", |f| f.hours = "8".into());
        state.edit_field("notes", |f| f.notes = "Deployed release".into());

        let mut list = ListState::default();
        let api_ref = &api;
        let list_ref = &mut list;
        let outcome = save(&mut state, &api, move || async move {
            let id = list_ref.begin();
            let result = api_ref
                .worklogs()
                .await
                .and_then(|r| r.into_data())
                .map_err(Into::into);
            list_ref.settle(id, result);
        })
        .await;

        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        assert!(!state.open);
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Post, "/worklog".to_string()),
                (Method::Get, "/worklog".to_string())
            ]
        );
        assert_eq!(
            transport.requests()[0].body,
            Some(json!({"serviceDate": "2024-01-05", "hours": 8, "notes": "Deployed release"}))
        );
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_hours_must_be_positive() {
        let form = WorklogForm {
            service_date: "2024-01-05".into(),
            hours: "0".into(),
            notes: "Support rota".into(),
        };
        let errors = form.validate();
        assert!(errors.has("hours"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_seeded_from_record() {
        let seed = Worklog {
            id: "w1".into(),
            service_date: "2024-01-05T00:00:00.000Z".into(),
            hours: 7.5,
            notes: "Code review".into(),
            user: None,
        };
        let state = DialogState::<WorklogForm>::edit("w1", &seed);
        assert_eq!(state.fields.service_date, "2024-01-05");
        assert_eq!(state.fields.hours, "7.5");
        assert_eq!(state.mode.id(), Some("w1"));
    }
}
