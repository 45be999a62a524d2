//! # Form and dialog controllers
//!
//! Every editable entity (feedback, worklog, company value, recognition,
//! employee invite, profile) goes through the same controller:
//!
//! 1. [`DialogState::create`] or [`DialogState::edit`] opens the dialog. In
//!    edit mode the fields are copied from the seed record once.
//! 2. [`DialogState::edit_field`] changes a field and clears its error.
//! 3. [`DialogState::begin_save`] validates and shapes the payload. An invalid
//!    form or a save already in flight stops here without a request.
//! 4. [`EntityForm::submit`] calls the matching domain function.
//! 5. [`DialogState::finish_save`] records the outcome. On success the caller
//!    refreshes the parent list once and closes the dialog.
//!
//! [`save`] runs steps 3 to 5 in one go.

mod company_value;
mod feedback;
mod invite;
mod person;
mod profile;
mod recognition;
pub mod validate;
mod worklog;

pub use company_value::CompanyValueForm;
pub use feedback::FeedbackForm;
pub use invite::InviteForm;
pub use person::PersonFields;
pub use profile::ProfileForm;
pub use recognition::RecognitionForm;
pub use worklog::WorklogForm;

use std::collections::BTreeSet;
use std::future::Future;

use api::{Api, ApiError, ApiResult, Transport};
use serde_json::Value;

use crate::failure::Failure;

/// Names of the fields that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeSet<&'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str) {
        self.0.insert(field);
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogMode {
    #[default]
    Create,
    Edit { id: String },
}

impl DialogMode {
    pub fn id(&self) -> Option<&str> {
        match self {
            DialogMode::Create => None,
            DialogMode::Edit { id } => Some(id.as_str()),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, DialogMode::Edit { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Saved { message: Option<String> },
    Invalid(FieldErrors),
    /// A previous save has not settled yet.
    Busy,
    Failed(Failure),
}

/// Field state, validation and submission for one entity.
pub trait EntityForm: Clone + Default + PartialEq {
    /// Record an edit dialog is opened with.
    type Seed;
    type Payload;

    const NAME: &'static str;

    fn from_seed(seed: &Self::Seed) -> Self;

    fn validate(&self) -> FieldErrors;

    /// Only called on a form that passed [`validate`](Self::validate).
    fn payload(&self, mode: &DialogMode) -> Self::Payload;

    /// Send the payload. `Ok` carries the backend's success message.
    fn submit<T: Transport>(
        api: &Api<T>,
        mode: &DialogMode,
        payload: &Self::Payload,
    ) -> impl Future<Output = Result<Option<String>, ApiError>>;
}

/// Turn a mutation response into its success message, or an error if the
/// envelope says it failed.
pub(crate) fn message_of<R>(response: ApiResult<R>) -> Result<Option<String>, ApiError> {
    let response = response?.into_result()?;
    Ok(response.message)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogState<F> {
    pub mode: DialogMode,
    pub fields: F,
    pub errors: FieldErrors,
    pub saving: bool,
    pub open: bool,
    pub failure: Option<Failure>,
}

impl<F: EntityForm> DialogState<F> {
    pub fn create() -> Self {
        Self::with(DialogMode::Create, F::default())
    }

    pub fn edit(id: impl Into<String>, seed: &F::Seed) -> Self {
        Self::with(DialogMode::Edit { id: id.into() }, F::from_seed(seed))
    }

    fn with(mode: DialogMode, fields: F) -> Self {
        Self {
            mode,
            fields,
            errors: FieldErrors::new(),
            saving: false,
            open: true,
            failure: None,
        }
    }

    pub fn edit_field(&mut self, field: &'static str, update: impl FnOnce(&mut F)) {
        update(&mut self.fields);
        self.errors.clear(field);
    }

    pub fn begin_save(&mut self) -> Result<F::Payload, SaveOutcome> {
        if self.saving {
            return Err(SaveOutcome::Busy);
        }
        let errors = self.fields.validate();
        if !errors.is_empty() {
            tracing::debug!(form = F::NAME, invalid = errors.len(), "form rejected locally");
            self.errors = errors.clone();
            return Err(SaveOutcome::Invalid(errors));
        }
        self.errors = FieldErrors::new();
        self.failure = None;
        self.saving = true;
        Ok(self.fields.payload(&self.mode))
    }

    pub fn finish_save(&mut self, result: Result<Option<String>, ApiError>) -> SaveOutcome {
        self.saving = false;
        match result {
            Ok(message) => {
                tracing::info!(form = F::NAME, mode = ?self.mode, "saved");
                SaveOutcome::Saved { message }
            }
            Err(err) => {
                tracing::warn!(form = F::NAME, error = ?err, "save rejected");
                let failure = Failure::from(err);
                self.failure = Some(failure.clone());
                SaveOutcome::Failed(failure)
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Validate, submit, and on success refresh the parent once and close.
pub async fn save<F, T, R, Fut>(state: &mut DialogState<F>, api: &Api<T>, refresh: R) -> SaveOutcome
where
    F: EntityForm,
    T: Transport,
    R: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let payload = match state.begin_save() {
        Ok(payload) => payload,
        Err(outcome) => return outcome,
    };
    let mode = state.mode.clone();
    let result = F::submit(api, &mode, &payload).await;
    let outcome = state.finish_save(result);
    if matches!(outcome, SaveOutcome::Saved { .. }) {
        refresh().await;
        state.close();
    }
    outcome
}

/// Delete a record, then refresh the parent list once.
pub async fn remove<D, R, Fut>(delete: D, refresh: R) -> Result<Option<String>, Failure>
where
    D: Future<Output = ApiResult<Value>>,
    R: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    match message_of(delete.await) {
        Ok(message) => {
            refresh().await;
            Ok(message)
        }
        Err(err) => {
            tracing::warn!(error = ?err, "delete rejected");
            Err(Failure::from(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::testing::MockTransport;
    use api::{Feedback, Method};
    use serde_json::json;
    use store::MemoryStore;

    use super::*;

    fn api(transport: &MockTransport) -> Api<MockTransport> {
        Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")))
    }

    #[tokio::test]
    async fn test_busy_while_saving() {
        let transport = MockTransport::new();
        let mut state = DialogState::<FeedbackForm>::create();
        state.edit_field("description", |f| f.description = "Nice demo".into());
        state.saving = true;

        let outcome = save(&mut state, &api(&transport), || async {}).await;
        assert_eq!(outcome, SaveOutcome::Busy);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_dialog_open() {
        let transport = MockTransport::new();
        transport.respond(
            Method::Post,
            "/feedback",
            422,
            json!({"success": false, "message": "Feedback is too short"}),
        );
        let api = api(&transport);
        let mut state = DialogState::<FeedbackForm>::create();
        state.edit_field("description", |f| f.description = "ok".into());

        let mut refreshed = 0;
        let outcome = save(&mut state, &api, || {
            refreshed += 1;
            async {}
        })
        .await;

        assert_eq!(
            outcome,
            SaveOutcome::Failed(Failure::Rejected("Feedback is too short".into()))
        );
        assert_eq!(refreshed, 0);
        assert!(state.open);
        assert!(!state.saving);
        assert_eq!(state.fields.description, "ok");
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_fails_save() {
        let transport = MockTransport::new();
        transport.respond_unsuccessful(Method::Put, "/feedback", "Not your feedback");
        let api = api(&transport);
        let seed = Feedback {
            id: "f1".into(),
            description: "hello".into(),
            ..Default::default()
        };
        let mut state = DialogState::<FeedbackForm>::edit("f1", &seed);

        let outcome = save(&mut state, &api, || async {}).await;
        assert!(matches!(outcome, SaveOutcome::Failed(_)));
        assert!(state.open);
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        let mut state = DialogState::<WorklogForm>::create();
        assert!(state.begin_save().is_err());
        assert!(state.errors.has("notes"));
        assert!(state.errors.has("hours"));

        state.edit_field("notes", |f| f.notes = "Standup".into());
        assert!(!state.errors.has("notes"));
        assert!(state.errors.has("hours"));
    }

    #[tokio::test]
    async fn test_remove_refreshes_once() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Delete, "/worklog", json!(null));
        transport.respond_ok(Method::Get, "/worklog", json!([]));
        let api = api(&transport);

        let api_ref = &api;
        let result = remove(api.delete_worklog("w1"), move || async move {
            let _ = api_ref.worklogs().await;
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(
            transport.calls(),
            vec![
                (Method::Delete, "/worklog".to_string()),
                (Method::Get, "/worklog".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_remove_skips_refresh() {
        let transport = MockTransport::new();
        transport.respond(Method::Delete, "/feedback", 404, json!({"message": "Not found"}));
        let api = api(&transport);

        let mut refreshed = false;
        let result = remove(api.delete_feedback("f1"), || {
            refreshed = true;
            async {}
        })
        .await;
        assert_eq!(result, Err(Failure::Rejected("Not found".into())));
        assert!(!refreshed);
    }
}
