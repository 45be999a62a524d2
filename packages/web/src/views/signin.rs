//! Sign-in page. Offers whichever strategy the build is configured for.

use api::auth::{authorize_url, LocalCredentials};
use api::Authenticator;
use dioxus::prelude::*;
use store::AuthStrategy;
use ui::components::{Button, TextField};
use ui::failure::Failure;
use ui::forms::validate::required;
use ui::forms::FieldErrors;
use ui::landing::{land, Landing};
use ui::platform::redirect;
use ui::{notify_error, report_failure, use_api, use_notifications, use_services, use_session};

use crate::Route;

#[component]
pub fn SignIn() -> Element {
    let services = use_services();
    let session = use_session();
    let nav = use_navigator();

    if session.status.read().user().is_some() {
        nav.replace(Route::DashboardOverview {});
    }

    let form = match services.config.auth.strategy {
        AuthStrategy::Local => rsx! { LocalSignIn {} },
        AuthStrategy::Identity => rsx! { IdentitySignIn {} },
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Sign in" }
                {form}
            }
        }
    }
}

#[component]
fn LocalSignIn() -> Element {
    let api = use_api();
    let services = use_services();
    let mut session = use_session();
    let mut notices = use_notifications();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if busy() {
            return;
        }
        let mut found = FieldErrors::new();
        required(&mut found, "email", &email.read());
        required(&mut found, "password", &password.read());
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let creds = LocalCredentials {
            email: email(),
            password: password(),
        };
        let api = api.clone();
        let app_domain = services.config.app_domain.clone();
        busy.set(true);
        spawn(async move {
            let landing = match creds.authenticate(&api).await {
                Ok(grant) => land(&grant, api.tenant(), &app_domain, api.tokens()),
                Err(err) => Err(Failure::from(err)),
            };
            busy.set(false);
            match landing {
                Ok(Landing::Here) => {
                    session.restart();
                    nav.push(Route::DashboardOverview {});
                }
                Ok(Landing::Tenant(url)) => redirect(&url),
                Err(failure) => report_failure(&failure, &mut notices, &mut session, &api),
            }
        });
    };

    rsx! {
        TextField {
            id: "signin-email",
            label: "Email",
            r#type: "email",
            value: email(),
            invalid: errors.read().has("email"),
            on_change: move |value| {
                email.set(value);
                errors.write().clear("email");
            },
        }
        TextField {
            id: "signin-password",
            label: "Password",
            r#type: "password",
            value: password(),
            invalid: errors.read().has("password"),
            on_change: move |value| {
                password.set(value);
                errors.write().clear("password");
            },
        }
        Button {
            class: "auth-submit",
            disabled: busy(),
            onclick: submit,
            if busy() { "Signing in..." } else { "Sign in" }
        }
        p {
            class: "muted",
            "New here? "
            Link { to: Route::SignUp {}, "Create an account" }
        }
    }
}

/// Sends the browser to the identity provider, which returns to
/// `/signin/callback`.
#[component]
fn IdentitySignIn() -> Element {
    let services = use_services();
    let mut notices = use_notifications();

    let start = move |_| {
        let auth = &services.config.auth;
        let Some(base) = auth.identity_authorize_url.as_deref() else {
            tracing::error!("identity sign-in selected without an authorize url");
            notify_error(&mut notices, "Sign-in provider is not configured.");
            return;
        };
        match authorize_url(base, &services.config.app_base_url) {
            Ok(url) => redirect(&url),
            Err(err) => notify_error(&mut notices, &err.to_string()),
        }
    };

    rsx! {
        p { class: "muted", "Continue with your organisation account." }
        Button { class: "auth-submit", onclick: start, "Continue" }
    }
}
