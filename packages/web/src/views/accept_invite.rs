use dioxus::prelude::*;
use ui::components::Spinner;
use ui::failure::Failure;
use ui::landing::{land, Landing};
use ui::platform::redirect;
use ui::{notify_error, use_api, use_notifications, use_services, use_session};

use crate::Route;

/// Invite links land here with the email token. Accepting it signs the new
/// employee in.
#[component]
pub fn AcceptInvite(token: String) -> Element {
    let api = use_api();
    let services = use_services();
    let mut session = use_session();
    let mut notices = use_notifications();
    let nav = use_navigator();
    let mut failed = use_signal(|| None::<String>);

    use_hook(move || {
        let app_domain = services.config.app_domain.clone();
        spawn(async move {
            let landing = match api.accept_invite(token.trim()).await.and_then(|r| r.into_data()) {
                Ok(grant) => land(&grant, api.tenant(), &app_domain, api.tokens()),
                Err(err) => Err(Failure::from(err)),
            };
            match landing {
                Ok(Landing::Here) => {
                    session.restart();
                    nav.replace(Route::DashboardOverview {});
                }
                Ok(Landing::Tenant(url)) => redirect(&url),
                Err(failure) => {
                    let message = failure.message();
                    notify_error(&mut notices, &message);
                    failed.set(Some(message));
                }
            }
        });
    });

    rsx! {
        div {
            class: "centered-page",
            if let Some(message) = failed() {
                h1 { "Invitation could not be accepted" }
                p { class: "muted", "{message}" }
                Link { to: Route::SignIn {}, "Go to sign in" }
            } else {
                Spinner {}
                p { class: "muted", "Accepting your invitation..." }
            }
        }
    }
}
