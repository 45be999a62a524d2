use api::Role;
use dioxus::prelude::*;

use crate::components::{SelectField, SelectOption, TextField};
use crate::forms::{FieldErrors, PersonFields};

const TEXT_FIELDS: &[(&str, &str, &str)] = &[
    ("firstName", "First Name", "text"),
    ("lastName", "Last Name", "text"),
    ("email", "Email", "email"),
    ("dob", "Date of Birth", "date"),
    ("department", "Department", "text"),
    ("designation", "Designation", "text"),
    ("joiningDate", "Joining Date", "date"),
    ("hourlyRate", "Hourly Rate", "number"),
];

fn value_of<'a>(fields: &'a PersonFields, name: &str) -> &'a str {
    match name {
        "firstName" => &fields.first_name,
        "lastName" => &fields.last_name,
        "email" => &fields.email,
        "dob" => &fields.dob,
        "department" => &fields.department,
        "designation" => &fields.designation,
        "joiningDate" => &fields.joining_date,
        "hourlyRate" => &fields.hourly_rate,
        _ => "",
    }
}

/// Inputs for an invite or a profile. The manager picker only appears for
/// employees.
#[component]
pub fn PersonFieldset(
    id_prefix: String,
    fields: PersonFields,
    errors: FieldErrors,
    managers: Vec<SelectOption>,
    #[props(default)]
    locked: Vec<&'static str>,
    on_edit: EventHandler<(&'static str, String)>,
) -> Element {
    let roles: Vec<SelectOption> = Role::ALL
        .iter()
        .map(|r| SelectOption::new(r.as_str(), r.label()))
        .collect();
    let role_value = fields.role.map(|r| r.as_str().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "field-grid",
            for &(name, label, kind) in TEXT_FIELDS {
                TextField {
                    key: "{name}",
                    id: "{id_prefix}-{name}",
                    label: label.to_string(),
                    r#type: kind.to_string(),
                    value: value_of(&fields, name).to_string(),
                    disabled: locked.contains(&name),
                    invalid: errors.has(name),
                    on_change: move |value| on_edit.call((name, value)),
                }
            }
            SelectField {
                id: "{id_prefix}-role",
                label: "Role",
                value: role_value,
                options: roles,
                disabled: locked.contains(&"role"),
                invalid: errors.has("role"),
                on_change: move |value| on_edit.call(("role", value)),
            }
            if fields.needs_manager() {
                SelectField {
                    id: "{id_prefix}-manager",
                    label: "Manager",
                    value: fields.manager.clone(),
                    options: managers,
                    disabled: locked.contains(&"manager"),
                    invalid: errors.has("manager"),
                    on_change: move |value| on_edit.call(("manager", value)),
                }
            }
        }
    }
}
