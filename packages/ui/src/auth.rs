//! Session context, bootstrap wiring and the logout button.

use dioxus::prelude::*;
use store::AuthStrategy;

use crate::failure::Failure;
use crate::icons::FaRightFromBracket;
use crate::notifications::{notify_error, Notifications};
use crate::platform::{redirect, AppApi, Services};
use crate::routes::Redirect;
use crate::session::{bootstrap, sign_out, BootstrapOutcome, SessionEvent, SessionStatus};
use crate::Icon;

/// Session status plus a way to re-run the bootstrap.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle {
    pub status: Signal<SessionStatus>,
    reload: Signal<u64>,
}

impl SessionHandle {
    /// Check the stored token again, e.g. after one was just written.
    pub fn restart(&mut self) {
        let next = self.status.peek().clone().reduce(SessionEvent::TokenFound);
        self.status.set(next);
        *self.reload.write() += 1;
    }

    /// Drop the token and forget the user. Guarded screens then redirect.
    pub fn expire(&mut self, api: &AppApi) {
        sign_out(api.tokens());
        let next = self.status.peek().clone().reduce(SessionEvent::SignedOut);
        self.status.set(next);
    }

    /// Replace the signed-in user after a profile save.
    pub fn replace_user(&mut self, user: api::UserInfo) {
        let next = self.status.peek().clone().reduce(SessionEvent::UserLoaded(user));
        self.status.set(next);
    }
}

pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

pub fn use_api() -> AppApi {
    use_services().api
}

pub fn use_auth_strategy() -> AuthStrategy {
    use_services().config.auth.strategy
}

/// Show a failure and, when the session is gone, sign out.
pub fn report_failure(
    failure: &Failure,
    notices: &mut Signal<Notifications>,
    session: &mut SessionHandle,
    api: &AppApi,
) {
    notify_error(notices, &failure.message());
    if failure.expires_session() {
        session.expire(api);
    }
}

/// Builds the client once and provides it, the session and notifications to
/// everything below.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_hook(|| Services::init().map_err(|e| e.to_string()));

    match services {
        Ok(services) => rsx! {
            SessionRoot { services, {children} }
        },
        Err(message) => rsx! {
            div { class: "fatal", "{message}" }
        },
    }
}

#[component]
fn SessionRoot(services: Services, children: Element) -> Element {
    let services = use_context_provider(|| services);
    let status = use_signal(|| SessionStatus::initial(services.api.tokens()));
    let reload = use_signal(|| 0u64);
    let mut session = use_context_provider(|| SessionHandle { status, reload });
    let mut notices = use_context_provider(|| Signal::new(Notifications::default()));

    let api = services.api.clone();
    let _bootstrap = use_resource(move || {
        let api = api.clone();
        // Subscribe so `restart` re-runs this.
        let _ = *session.reload.read();
        async move {
            if !session.status.peek().is_loading() {
                return;
            }
            let outcome = bootstrap(&api).await;
            let next = session.status.peek().clone().reduce(outcome.event());
            session.status.set(next);
            if let BootstrapOutcome::Expired { message } = outcome {
                notify_error(&mut notices, &message);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Clear the token and reload on the sign-in page.
#[component]
pub fn LogoutButton(#[props(default = "Logout".to_string())] label: String) -> Element {
    let api = use_api();
    let mut session = use_session();

    rsx! {
        button {
            class: "logout-button",
            title: "{label}",
            onclick: move |_| {
                session.expire(&api);
                redirect(Redirect::SignIn.path());
            },
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            span { "{label}" }
        }
    }
}
