//! # Users, roles and sign-in documents
//!
//! [`UserInfo`] is what `GET /users/info` and `GET /users` return. Its
//! [`Role`] decides which screens the navigation shell offers and whether the
//! profile form is editable. [`UserSummary`] is the slimmer shape the backend
//! embeds when it populates a user reference inside feedback, worklogs and
//! recognitions.
//!
//! The sign-in endpoints (`/users/signin`, `/users/accept-invite`) answer with
//! a [`SignInGrant`]: the session token and, for multi-tenant accounts, the
//! organisation subdomain the client should continue on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::reference::{whole_number, Identified, Ref};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Manager => "MANAGER",
            Role::Employee => "EMPLOYEE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Ok(Role::Admin),
            "MANAGER" => Ok(Role::Manager),
            "EMPLOYEE" => Ok(Role::Employee),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// A populated user reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Identified for UserSummary {
    fn id(&self) -> &str {
        &self.id
    }
}

/// The signed-in user (or any user in the directory).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub joining_date: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub manager: Option<Ref<UserSummary>>,
}

impl UserInfo {
    /// Display name, falling back to email if no name is set.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn manager_id(&self) -> Option<&str> {
        self.manager.as_ref().map(Ref::id)
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: Some(self.email.clone()),
        }
    }
}

impl Identified for UserInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Session token (and tenant) issued by sign-in or invite acceptance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInGrant {
    pub token: String,
    #[serde(default)]
    pub subdomain: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub subdomain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SigninPayload {
    pub email: String,
    /// Absent for the identity-provider exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitePayload {
    pub email_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitePayload {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    #[serde(serialize_with = "whole_number")]
    pub hourly_rate: f64,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    #[serde(serialize_with = "whole_number")]
    pub hourly_rate: f64,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_info_from_backend() {
        let user: UserInfo = serde_json::from_value(json!({
            "_id": "u1",
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@acme.test",
            "role": "MANAGER",
            "hourlyRate": 42.5,
            "manager": "u0",
            "unknownField": true
        }))
        .unwrap();
        assert_eq!(user.role, Role::Manager);
        assert_eq!(user.hourly_rate, Some(42.5));
        assert_eq!(user.manager_id(), Some("u0"));
        assert_eq!(user.display_name(), "Grace Hopper");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserInfo {
            id: "u1".into(),
            email: "someone@acme.test".into(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "someone@acme.test");
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::Employee.to_string(), "EMPLOYEE");
        assert!("owner".parse::<Role>().is_err());
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("ADMIN"));
    }

    #[test]
    fn test_signin_payload_omits_missing_password() {
        let payload = SigninPayload {
            email: "a@acme.test".into(),
            password: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"email": "a@acme.test"})
        );
    }
}
