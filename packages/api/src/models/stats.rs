//! Dashboard figures. The backend fills only the sections the caller's role
//! may see, so every section is optional and every figure defaults to zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationStats {
    pub total_feedback_received: f64,
    pub total_work_hours: f64,
    pub total_disbursements: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamStats {
    pub total_feedback_received: f64,
    pub total_work_hours: f64,
    pub total_disbursements: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalStats {
    pub total_feedback_shared: f64,
    pub total_hours_worked: f64,
    pub total_earnings: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub organization: Option<OrganizationStats>,
    pub team: Option<TeamStats>,
    pub personal: Option<PersonalStats>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_stats() {
        let stats: Stats = serde_json::from_value(json!({
            "personal": {"totalHoursWorked": 12.5}
        }))
        .unwrap();
        assert!(stats.organization.is_none());
        let personal = stats.personal.unwrap();
        assert_eq!(personal.total_hours_worked, 12.5);
        assert_eq!(personal.total_earnings, 0.0);
    }
}
