//! Where the browser goes once the backend has issued a session token.
//!
//! A token only works on the origin it is stored on. When the grant names a
//! tenant other than the one this page was served for, the token travels in
//! the query string of [`api::auth::IDENTITY_PATH`] on that tenant instead.

use api::auth::tenant_redirect_url;
use api::SignInGrant;
use store::TokenStore;

use crate::failure::Failure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Landing {
    /// Token stored here; re-run the bootstrap and stay in the app.
    Here,
    /// Full-page navigation to the tenant's origin.
    Tenant(String),
}

pub fn land(
    grant: &SignInGrant,
    current_tenant: Option<&str>,
    app_domain: &str,
    tokens: &dyn TokenStore,
) -> Result<Landing, Failure> {
    let target = grant
        .subdomain
        .as_deref()
        .map(str::trim)
        .filter(|sub| !sub.is_empty());

    match target {
        Some(sub) if Some(sub) != current_tenant => {
            tracing::info!(tenant = sub, "continuing sign-in on tenant origin");
            let url = tenant_redirect_url(grant, app_domain)?;
            Ok(Landing::Tenant(url))
        }
        _ => {
            tokens.set(&grant.token)?;
            Ok(Landing::Here)
        }
    }
}

#[cfg(test)]
mod tests {
    use store::MemoryStore;

    use super::*;

    fn grant(subdomain: Option<&str>) -> SignInGrant {
        SignInGrant {
            token: "tok-9".into(),
            subdomain: subdomain.map(String::from),
        }
    }

    #[test]
    fn test_same_tenant_stores_token() {
        let tokens = MemoryStore::new();
        let landing = land(&grant(Some("acme")), Some("acme"), "hr.test", &tokens).unwrap();
        assert_eq!(landing, Landing::Here);
        assert_eq!(tokens.get().as_deref(), Some("tok-9"));
    }

    #[test]
    fn test_no_subdomain_stores_token() {
        let tokens = MemoryStore::new();
        let landing = land(&grant(None), None, "hr.test", &tokens).unwrap();
        assert_eq!(landing, Landing::Here);
        assert!(tokens.has_token());
    }

    #[test]
    fn test_other_tenant_redirects_without_storing() {
        let tokens = MemoryStore::new();
        let landing = land(&grant(Some("acme")), None, "hr.test", &tokens).unwrap();
        assert_eq!(
            landing,
            Landing::Tenant("http://acme.hr.test/signin/identity?token=tok-9".into())
        );
        assert!(!tokens.has_token());
    }
}
