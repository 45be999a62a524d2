use serde::{Deserialize, Serialize};

use super::reference::{whole_number, Identified, Ref};
use super::user::UserSummary;

/// Hours logged against a service date (`YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub service_date: String,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub user: Option<Ref<UserSummary>>,
}

impl Worklog {
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(Ref::id)
    }

    /// Service date without any time component the backend may append.
    pub fn service_day(&self) -> &str {
        self.service_date
            .split_once('T')
            .map_or(self.service_date.as_str(), |(day, _)| day)
    }
}

impl Identified for Worklog {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorklogPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub service_date: String,
    #[serde(serialize_with = "whole_number")]
    pub hours: f64,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_shape() {
        let payload = WorklogPayload {
            id: None,
            service_date: "2024-01-05".into(),
            hours: 8.0,
            notes: "Deployed release".into(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"serviceDate": "2024-01-05", "hours": 8, "notes": "Deployed release"})
        );
    }

    #[test]
    fn test_service_day_strips_time() {
        let log = Worklog {
            service_date: "2024-01-05T00:00:00.000Z".into(),
            ..Default::default()
        };
        assert_eq!(log.service_day(), "2024-01-05");
    }
}
