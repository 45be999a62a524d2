use api::{Api, ApiError, ProfilePayload, Role, Transport, UserInfo};

use super::person::PersonFields;
use super::{message_of, DialogMode, EntityForm, FieldErrors};

/// Fields anyone may change on their own profile. Admins may change all.
const SELF_EDITABLE: &[&str] = &["firstName", "lastName", "dob", "manager"];

/// The signed-in user's profile on the settings screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub person: PersonFields,
}

impl ProfileForm {
    pub fn editable(field: &str, viewer: Role) -> bool {
        viewer == Role::Admin || SELF_EDITABLE.contains(&field)
    }

    /// Fields shown read-only to `viewer`.
    pub fn locked(viewer: Role) -> Vec<&'static str> {
        PersonFields::FIELDS
            .into_iter()
            .filter(|field| !Self::editable(field, viewer))
            .collect()
    }
}

impl EntityForm for ProfileForm {
    type Seed = UserInfo;
    type Payload = ProfilePayload;

    const NAME: &'static str = "profile";

    fn from_seed(user: &UserInfo) -> Self {
        Self {
            person: PersonFields::from_user(user),
        }
    }

    fn validate(&self) -> FieldErrors {
        self.person.validate()
    }

    fn payload(&self, _: &DialogMode) -> ProfilePayload {
        let p = &self.person;
        ProfilePayload {
            first_name: PersonFields::trimmed(&p.first_name),
            last_name: PersonFields::trimmed(&p.last_name),
            dob: PersonFields::trimmed(&p.dob),
            email: PersonFields::trimmed(&p.email),
            department: PersonFields::trimmed(&p.department),
            designation: PersonFields::trimmed(&p.designation),
            joining_date: PersonFields::trimmed(&p.joining_date),
            hourly_rate: p.hourly_rate_value(),
            role: p.role.unwrap_or_default(),
            manager: p.manager_value(),
        }
    }

    async fn submit<T: Transport>(
        api: &Api<T>,
        _: &DialogMode,
        payload: &ProfilePayload,
    ) -> Result<Option<String>, ApiError> {
        message_of(api.update_profile(payload).await)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::testing::MockTransport;
    use api::{Method, Ref};
    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::forms::{save, DialogState, SaveOutcome};

    fn employee() -> UserInfo {
        UserInfo {
            id: "u7".into(),
            first_name: "Katherine".into(),
            last_name: "Johnson".into(),
            email: "kj@acme.test".into(),
            role: Role::Employee,
            department: Some("Flight".into()),
            designation: Some("Analyst".into()),
            dob: Some("1990-08-26T00:00:00.000Z".into()),
            joining_date: Some("2023-03-01".into()),
            hourly_rate: Some(40.0),
            manager: Some(Ref::Id("u2".into())),
        }
    }

    #[test]
    fn test_seeded_from_user() {
        let state = DialogState::<ProfileForm>::edit("u7", &employee());
        let p = &state.fields.person;
        assert_eq!(p.dob, "1990-08-26");
        assert_eq!(p.hourly_rate, "40");
        assert_eq!(p.manager, "u2");
        assert!(state.fields.validate().is_empty());
    }

    #[test]
    fn test_non_admin_edit_rights() {
        assert!(ProfileForm::editable("firstName", Role::Employee));
        assert!(ProfileForm::editable("manager", Role::Employee));
        assert!(!ProfileForm::editable("hourlyRate", Role::Manager));
        assert!(ProfileForm::editable("hourlyRate", Role::Admin));
    }

    #[test]
    fn test_locked_fields() {
        assert!(ProfileForm::locked(Role::Admin).is_empty());
        assert_eq!(
            ProfileForm::locked(Role::Employee),
            vec!["email", "department", "designation", "joiningDate", "hourlyRate", "role"]
        );
    }

    #[tokio::test]
    async fn test_clearing_manager_blocks_save() {
        let transport = MockTransport::new();
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<ProfileForm>::edit("u7", &employee());
        state.edit_field("manager", |f| f.person.manager.clear());

        let outcome = save(&mut state, &api, || async {}).await;
        assert!(matches!(outcome, SaveOutcome::Invalid(ref e) if e.has("manager")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_profile_put() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Put, "/users/profile", json!({"_id": "u7"}));
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));
        let mut state = DialogState::<ProfileForm>::edit("u7", &employee());

        let outcome = save(&mut state, &api, || async {}).await;
        assert!(matches!(outcome, SaveOutcome::Saved { .. }));
        let body = transport.requests()[0].body.clone().unwrap();
        assert_eq!(body["manager"], json!("u2"));
        assert_eq!(body["dob"], json!("1990-08-26"));
        assert!(body.get("id").is_none());
    }
}
