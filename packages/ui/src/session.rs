//! # Session state machine and bootstrap
//!
//! ```text
//! Unauthenticated --TokenFound--> Loading --UserLoaded--> Authenticated(user)
//!                                    |
//!                                    +----UserFailed----> Unauthenticated
//! ```
//!
//! [`SessionStatus::reduce`] is the only way the status changes. `SignedOut`
//! and `NoToken` return to `Unauthenticated` from anywhere.
//!
//! [`bootstrap`] runs once on page load (and again after an identity or
//! invite token is stored): with a token present it fetches the current user,
//! and on any failure it drops the token. A transport failure is treated the
//! same as an invalid session.

use api::{Api, Role, Transport, UserInfo};
use store::TokenStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated(UserInfo),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    TokenFound,
    NoToken,
    UserLoaded(UserInfo),
    UserFailed,
    SignedOut,
}

impl SessionStatus {
    /// Status to start from, given what is in storage.
    pub fn initial(tokens: &dyn TokenStore) -> Self {
        let event = if tokens.has_token() {
            SessionEvent::TokenFound
        } else {
            SessionEvent::NoToken
        };
        SessionStatus::Unauthenticated.reduce(event)
    }

    pub fn reduce(self, event: SessionEvent) -> Self {
        let next = match (&self, event) {
            (_, SessionEvent::SignedOut | SessionEvent::NoToken) => SessionStatus::Unauthenticated,
            (_, SessionEvent::TokenFound) => SessionStatus::Loading,
            (SessionStatus::Loading, SessionEvent::UserLoaded(user)) => {
                SessionStatus::Authenticated(user)
            }
            // A refreshed profile while signed in replaces the user.
            (SessionStatus::Authenticated(_), SessionEvent::UserLoaded(user)) => {
                SessionStatus::Authenticated(user)
            }
            (SessionStatus::Loading, SessionEvent::UserFailed) => SessionStatus::Unauthenticated,
            (_, SessionEvent::UserLoaded(_) | SessionEvent::UserFailed) => self.clone(),
        };
        if next != self {
            tracing::info!(from = self.label(), to = next.label(), "session transition");
        }
        next
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionStatus::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionStatus::Loading)
    }

    fn label(&self) -> &'static str {
        match self {
            SessionStatus::Unauthenticated => "unauthenticated",
            SessionStatus::Loading => "loading",
            SessionStatus::Authenticated(_) => "authenticated",
        }
    }
}

/// Result of one bootstrap run.
#[derive(Debug, Clone, PartialEq)]
pub enum BootstrapOutcome {
    /// No token stored; nothing was fetched.
    Anonymous,
    SignedIn(UserInfo),
    /// The token was rejected (or the check could not complete) and has been
    /// removed. The caller sends the browser to sign-in.
    Expired { message: String },
}

impl BootstrapOutcome {
    pub fn event(&self) -> SessionEvent {
        match self {
            BootstrapOutcome::Anonymous => SessionEvent::NoToken,
            BootstrapOutcome::SignedIn(user) => SessionEvent::UserLoaded(user.clone()),
            BootstrapOutcome::Expired { .. } => SessionEvent::UserFailed,
        }
    }
}

pub async fn bootstrap<T: Transport>(api: &Api<T>) -> BootstrapOutcome {
    if !api.tokens().has_token() {
        return BootstrapOutcome::Anonymous;
    }

    match api.current_user().await.and_then(|r| r.into_data()) {
        Ok(user) => {
            tracing::info!(user = %user.id, role = %user.role, "session restored");
            BootstrapOutcome::SignedIn(user)
        }
        Err(err) => {
            tracing::warn!(error = ?err, "stored session rejected, signing out");
            sign_out(api.tokens());
            BootstrapOutcome::Expired {
                message: err.to_string(),
            }
        }
    }
}

/// Drop the stored token. The caller then navigates to the sign-in page.
pub fn sign_out(tokens: &dyn TokenStore) {
    if let Err(e) = tokens.clear() {
        tracing::error!(error = %e, "failed to clear session token");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use api::testing::MockTransport;
    use api::Method;
    use serde_json::json;
    use store::MemoryStore;

    use super::*;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            first_name: "Ada".into(),
            role,
            ..Default::default()
        }
    }

    #[test]
    fn test_reducer_paths() {
        let loading = SessionStatus::Unauthenticated.reduce(SessionEvent::TokenFound);
        assert!(loading.is_loading());

        let signed_in = loading.clone().reduce(SessionEvent::UserLoaded(user(Role::Manager)));
        assert_eq!(signed_in.role(), Some(Role::Manager));

        assert_eq!(
            loading.reduce(SessionEvent::UserFailed),
            SessionStatus::Unauthenticated
        );
        assert_eq!(
            signed_in.reduce(SessionEvent::SignedOut),
            SessionStatus::Unauthenticated
        );
    }

    #[test]
    fn test_user_loaded_without_loading_is_ignored() {
        let status = SessionStatus::Unauthenticated.reduce(SessionEvent::UserLoaded(user(Role::Admin)));
        assert_eq!(status, SessionStatus::Unauthenticated);
    }

    #[test]
    fn test_initial_status_follows_storage() {
        assert!(SessionStatus::initial(&MemoryStore::with_token("t")).is_loading());
        assert_eq!(
            SessionStatus::initial(&MemoryStore::new()),
            SessionStatus::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_bootstrap_without_token_fetches_nothing() {
        let transport = MockTransport::new();
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::new()));

        assert_eq!(bootstrap(&api).await, BootstrapOutcome::Anonymous);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_restores_user() {
        let transport = MockTransport::new();
        transport.respond_ok(
            Method::Get,
            "/users/info",
            json!({"_id": "u1", "firstName": "Ada", "role": "EMPLOYEE"}),
        );
        let api = Api::new(transport, Arc::new(MemoryStore::with_token("t")));

        let outcome = bootstrap(&api).await;
        let status = SessionStatus::Loading.reduce(outcome.event());
        assert_eq!(status.role(), Some(Role::Employee));
        assert!(api.tokens().has_token());
    }

    #[tokio::test]
    async fn test_failed_bootstrap_clears_token() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/users/info", 401, json!({"message": "jwt expired"}));
        let api = Api::new(transport, Arc::new(MemoryStore::with_token("stale")));

        let outcome = bootstrap(&api).await;
        assert_eq!(
            outcome,
            BootstrapOutcome::Expired {
                message: "jwt expired".into()
            }
        );
        assert!(!api.tokens().has_token());
        assert_eq!(
            SessionStatus::Loading.reduce(outcome.event()),
            SessionStatus::Unauthenticated
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_treated_as_invalid_session() {
        let transport = MockTransport::new();
        transport.fail_transport(Method::Get, "/users/info");
        let api = Api::new(transport, Arc::new(MemoryStore::with_token("t")));

        assert!(matches!(bootstrap(&api).await, BootstrapOutcome::Expired { .. }));
        assert!(!api.tokens().has_token());
    }

    #[tokio::test]
    async fn test_unsuccessful_envelope_is_a_failure() {
        let transport = MockTransport::new();
        transport.respond_unsuccessful(Method::Get, "/users/info", "User not found");
        let api = Api::new(transport, Arc::new(MemoryStore::with_token("t")));

        assert_eq!(
            bootstrap(&api).await,
            BootstrapOutcome::Expired {
                message: "User not found".into()
            }
        );
    }
}
