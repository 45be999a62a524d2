use api::{Api, ApiError, InvitePayload, Transport};

use super::person::PersonFields;
use super::{message_of, DialogMode, EntityForm, FieldErrors};

/// Invite a new employee. Always opened in create mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InviteForm {
    pub person: PersonFields,
}

impl EntityForm for InviteForm {
    type Seed = ();
    type Payload = InvitePayload;

    const NAME: &'static str = "invite";

    fn from_seed(_: &()) -> Self {
        Self::default()
    }

    fn validate(&self) -> FieldErrors {
        self.person.validate()
    }

    fn payload(&self, _: &DialogMode) -> InvitePayload {
        let p = &self.person;
        InvitePayload {
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
        payload: &InvitePayload,
    ) -> Result<Option<String>, ApiError> {
        message_of(api.invite(payload).await)
    }
}
