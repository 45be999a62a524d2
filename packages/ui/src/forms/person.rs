//! Fields shared by the invite dialog and the profile form.

use api::{Role, UserInfo};

use super::validate::{date, date_part, number_text, parse_positive, positive_number, required};
use super::FieldErrors;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    pub hourly_rate: String,
    pub role: Option<Role>,
    /// Manager's user id. Only meaningful for employees.
    pub manager: String,
}

impl PersonFields {
    /// Wire names of every field, in form order.
    pub const FIELDS: [&'static str; 10] = [
        "firstName",
        "lastName",
        "email",
        "dob",
        "department",
        "designation",
        "joiningDate",
        "hourlyRate",
        "role",
        "manager",
    ];

    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            dob: user.dob.as_deref().map(date_part).unwrap_or_default(),
            email: user.email.clone(),
            department: user.department.clone().unwrap_or_default(),
            designation: user.designation.clone().unwrap_or_default(),
            joining_date: user.joining_date.as_deref().map(date_part).unwrap_or_default(),
            hourly_rate: user.hourly_rate.map(number_text).unwrap_or_default(),
            role: Some(user.role),
            manager: user.manager_id().unwrap_or_default().to_string(),
        }
    }

    /// Set a field from its input value, by wire name.
    pub fn set(&mut self, field: &str, value: String) {
        match field {
            "firstName" => self.first_name = value,
            "lastName" => self.last_name = value,
            "dob" => self.dob = value,
            "email" => self.email = value,
            "department" => self.department = value,
            "designation" => self.designation = value,
            "joiningDate" => self.joining_date = value,
            "hourlyRate" => self.hourly_rate = value,
            "role" => self.role = value.parse().ok(),
            "manager" => self.manager = value,
            other => tracing::warn!(field = other, "unknown person field"),
        }
    }

    pub fn needs_manager(&self) -> bool {
        self.role == Some(Role::Employee)
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        required(&mut errors, "firstName", &self.first_name);
        required(&mut errors, "lastName", &self.last_name);
        date(&mut errors, "dob", &self.dob);
        required(&mut errors, "email", &self.email);
        required(&mut errors, "department", &self.department);
        required(&mut errors, "designation", &self.designation);
        date(&mut errors, "joiningDate", &self.joining_date);
        positive_number(&mut errors, "hourlyRate", &self.hourly_rate);
        if self.role.is_none() {
            errors.insert("role");
        }
        if self.needs_manager() {
            required(&mut errors, "manager", &self.manager);
        }
        errors
    }

    pub(crate) fn hourly_rate_value(&self) -> f64 {
        parse_positive(&self.hourly_rate).unwrap_or_default()
    }

    /// Manager id for the payload; dropped unless the role needs one.
    pub(crate) fn manager_value(&self) -> Option<String> {
        self.needs_manager()
            .then(|| self.manager.trim().to_string())
            .filter(|m| !m.is_empty())
    }

    pub(crate) fn trimmed(value: &str) -> String {
        value.trim().to_string()
    }
}
