//! Identity-provider handshake.
//!
//! 1. The provider sends the browser back to [`CALLBACK_PATH`] with the verified
//!    email; that becomes a [`ProviderIdentity`].
//! 2. [`IdentityExchange`] trades it for a [`SignInGrant`] at the backend.
//! 3. [`tenant_redirect_url`] points the browser at the tenant's subdomain,
//!    carrying the token in the query string.
//! 4. On [`IDENTITY_PATH`] the token is parsed into an [`IdentityToken`] and
//!    written to the token store.
//!
//! Each step only accepts the output of the previous one.

use reqwest::Url;
use store::{StoreError, TokenStore};

use crate::client::Api;
use crate::error::ApiError;
use crate::models::{SignInGrant, SigninPayload};
use crate::transport::Transport;

use super::Authenticator;

pub const CALLBACK_PATH: &str = "/signin/callback";
pub const IDENTITY_PATH: &str = "/signin/identity";

/// The email the provider vouched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderIdentity {
    email: String,
}

impl ProviderIdentity {
    /// `None` for a blank email.
    pub fn from_callback(email: &str) -> Option<Self> {
        let email = email.trim();
        (!email.is_empty()).then(|| Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Second hop: provider identity to backend grant. No password is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityExchange(pub ProviderIdentity);

impl Authenticator for IdentityExchange {
    async fn authenticate<T: Transport>(&self, api: &Api<T>) -> Result<SignInGrant, ApiError> {
        let payload = SigninPayload {
            email: self.0.email.clone(),
            password: None,
        };
        let grant = api.signin(&payload).await?.into_data()?;
        tracing::info!(email = %self.0.email, subdomain = ?grant.subdomain, "identity exchanged");
        Ok(grant)
    }
}

/// Where to send the browser so the tenant's origin stores the token.
///
/// Without a subdomain in the grant the app domain itself is used.
pub fn tenant_redirect_url(grant: &SignInGrant, app_domain: &str) -> Result<String, ApiError> {
    let host = match grant.subdomain.as_deref().map(str::trim) {
        Some(sub) if !sub.is_empty() => format!("{sub}.{app_domain}"),
        _ => app_domain.to_string(),
    };
    let base = format!("http://{host}{IDENTITY_PATH}");
    Url::parse_with_params(&base, &[("token", grant.token.as_str())])
        .map(String::from)
        .map_err(ApiError::unexpected)
}

/// Provider login page, asking it to return to our callback.
pub fn authorize_url(authorize_base: &str, app_base_url: &str) -> Result<String, ApiError> {
    let redirect = format!("{}{CALLBACK_PATH}", app_base_url.trim_end_matches('/'));
    Url::parse_with_params(authorize_base, &[("redirect_uri", redirect.as_str())])
        .map(String::from)
        .map_err(ApiError::unexpected)
}

/// Session token delivered in the `/signin/identity` query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityToken(String);

impl IdentityToken {
    pub fn from_query(token: &str) -> Option<Self> {
        let token = token.trim();
        (!token.is_empty()).then(|| Self(token.to_string()))
    }

    /// Persist the token; the caller then re-runs the session bootstrap.
    pub fn consume(self, tokens: &dyn TokenStore) -> Result<(), StoreError> {
        tokens.set(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_exchange_sends_email_only() {
        let transport = MockTransport::new();
        transport.respond_ok(
            Method::Post,
            "/users/signin",
            json!({"token": "t-1", "subdomain": "acme"}),
        );
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::new()));

        let identity = ProviderIdentity::from_callback("ada@acme.test").unwrap();
        let grant = IdentityExchange(identity).authenticate(&api).await.unwrap();

        assert_eq!(grant.subdomain.as_deref(), Some("acme"));
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({"email": "ada@acme.test"}))
        );
    }

    #[tokio::test]
    async fn test_exchange_rejection_surfaces_message() {
        let transport = MockTransport::new();
        transport.respond(
            Method::Post,
            "/users/signin",
            404,
            json!({"success": false, "message": "No account for this email"}),
        );
        let api = Api::new(transport, Arc::new(MemoryStore::new()));

        let identity = ProviderIdentity::from_callback("nobody@acme.test").unwrap();
        let err = IdentityExchange(identity).authenticate(&api).await.unwrap_err();
        assert_eq!(err.to_string(), "No account for this email");
    }

    #[test]
    fn test_tenant_redirect_url() {
        let grant = SignInGrant {
            token: "abc 123".into(),
            subdomain: Some("acme".into()),
        };
        assert_eq!(
            tenant_redirect_url(&grant, "hr.example.com").unwrap(),
            "http://acme.hr.example.com/signin/identity?token=abc+123"
        );

        let bare = SignInGrant {
            token: "t".into(),
            subdomain: None,
        };
        assert_eq!(
            tenant_redirect_url(&bare, "localhost:3000").unwrap(),
            "http://localhost:3000/signin/identity?token=t"
        );
    }

    #[test]
    fn test_authorize_url() {
        let url = authorize_url("https://id.example.com/authorize", "http://acme.localhost:3000/")
            .unwrap();
        assert_eq!(
            url,
            "https://id.example.com/authorize?redirect_uri=http%3A%2F%2Facme.localhost%3A3000%2Fsignin%2Fcallback"
        );
    }

    #[test]
    fn test_identity_token_consumed_into_store() {
        assert!(IdentityToken::from_query("  ").is_none());
        assert!(ProviderIdentity::from_callback("").is_none());

        let store = MemoryStore::new();
        IdentityToken::from_query("tok-9")
            .unwrap()
            .consume(&store)
            .unwrap();
        assert_eq!(store.get().as_deref(), Some("tok-9"));
    }
}
