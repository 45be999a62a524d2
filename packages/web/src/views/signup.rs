use api::SignupPayload;
use dioxus::prelude::*;
use ui::components::{Button, TextField};
use ui::failure::Failure;
use ui::forms::validate::required;
use ui::forms::FieldErrors;
use ui::{notify_success, report_failure, use_api, use_notifications, use_session};

use crate::Route;

const FIELDS: &[(&str, &str, &str)] = &[
    ("firstName", "First Name", "text"),
    ("lastName", "Last Name", "text"),
    ("email", "Email", "email"),
    ("password", "Password", "password"),
    ("companyName", "Company Name", "text"),
    ("subdomain", "Subdomain", "text"),
];

fn field_mut<'a>(payload: &'a mut SignupPayload, name: &str) -> Option<&'a mut String> {
    match name {
        "firstName" => Some(&mut payload.first_name),
        "lastName" => Some(&mut payload.last_name),
        "email" => Some(&mut payload.email),
        "password" => Some(&mut payload.password),
        "companyName" => Some(&mut payload.company_name),
        "subdomain" => Some(&mut payload.subdomain),
        _ => None,
    }
}

fn field<'a>(payload: &'a SignupPayload, name: &str) -> &'a str {
    match name {
        "firstName" => &payload.first_name,
        "lastName" => &payload.last_name,
        "email" => &payload.email,
        "password" => &payload.password,
        "companyName" => &payload.company_name,
        "subdomain" => &payload.subdomain,
        _ => "",
    }
}

/// Registers a new organisation and its first admin.
#[component]
pub fn SignUp() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut form = use_signal(SignupPayload::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let payload = form();
        let mut found = FieldErrors::new();
        for &(name, _, _) in FIELDS {
            required(&mut found, name, field(&payload, name));
        }
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let api = api.clone();
        busy.set(true);
        spawn(async move {
            let result = api.signup(&payload).await.and_then(|r| r.into_result());
            busy.set(false);
            match result {
                Ok(response) => {
                    notify_success(&mut notices, response.message, "Account created. Please sign in.");
                    nav.push(Route::SignIn {});
                }
                Err(err) => report_failure(&Failure::from(err), &mut notices, &mut session, &api),
            }
        });
    };

    let values = form.read().clone();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Create your workspace" }
                for &(name, label, kind) in FIELDS {
                    TextField {
                        key: "{name}",
                        id: "signup-{name}",
                        label: label.to_string(),
                        r#type: kind.to_string(),
                        value: field(&values, name).to_string(),
                        invalid: errors.read().has(name),
                        on_change: move |value: String| {
                            if let Some(slot) = field_mut(&mut form.write(), name) {
                                *slot = value;
                            }
                            errors.write().clear(name);
                        },
                    }
                }
                Button {
                    class: "auth-submit",
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Creating..." } else { "Sign up" }
                }
                p {
                    class: "muted",
                    "Already registered? "
                    Link { to: Route::SignIn {}, "Sign in" }
                }
            }
        }
    }
}
