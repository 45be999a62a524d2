//! Landing pages of the identity-provider handshake.

use api::auth::{tenant_redirect_url, IdentityExchange, IdentityToken, ProviderIdentity};
use api::Authenticator;
use dioxus::prelude::*;
use ui::components::Spinner;
use ui::failure::Failure;
use ui::platform::redirect;
use ui::{notify_error, use_api, use_notifications, use_services, use_session};

use crate::Route;

/// The provider returns here with the verified email. The backend trades it
/// for a token, and the browser continues on the tenant's origin.
#[component]
pub fn SignInCallback(email: String) -> Element {
    let api = use_api();
    let services = use_services();
    let mut notices = use_notifications();
    let nav = use_navigator();

    use_hook(move || {
        let app_domain = services.config.app_domain.clone();
        spawn(async move {
            let Some(identity) = ProviderIdentity::from_callback(&email) else {
                tracing::warn!("identity callback without an email");
                notify_error(&mut notices, "Sign-in was cancelled.");
                nav.replace(Route::SignIn {});
                return;
            };
            let target = IdentityExchange(identity)
                .authenticate(&api)
                .await
                .and_then(|grant| tenant_redirect_url(&grant, &app_domain));
            match target {
                Ok(url) => redirect(&url),
                Err(err) => {
                    notify_error(&mut notices, &Failure::from(err).message());
                    nav.replace(Route::SignIn {});
                }
            }
        });
    });

    rsx! {
        div { class: "page-loading", Spinner {} }
    }
}

/// Stores the token carried in the query string, then loads the session.
#[component]
pub fn SignInIdentity(token: String) -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut notices = use_notifications();
    let nav = use_navigator();

    use_hook(move || {
        let stored = match IdentityToken::from_query(&token) {
            Some(token) => token.consume(api.tokens()).map_err(Failure::from),
            None => Err(Failure::Rejected("Sign-in link is missing its token.".to_string())),
        };
        match stored {
            Ok(()) => {
                session.restart();
                nav.replace(Route::DashboardOverview {});
            }
            Err(failure) => {
                notify_error(&mut notices, &failure.message());
                nav.replace(Route::SignIn {});
            }
        }
    });

    rsx! {
        div { class: "page-loading", Spinner {} }
    }
}
