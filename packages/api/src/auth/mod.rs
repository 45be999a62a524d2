//! # Sign-in strategies
//!
//! Both ways of obtaining a session token end in the same place: a
//! [`SignInGrant`] from `POST /users/signin`. [`Authenticator`] is the seam the
//! sign-in screen talks to; which implementation it gets is decided by
//! [`store::AuthStrategy`] in the build configuration.
//!
//! | Strategy | Type | Input |
//! |----------|------|-------|
//! | `local` | [`LocalCredentials`] | email + password typed on the sign-in screen |
//! | `identity` | [`IdentityExchange`] | email verified by the external identity provider |
//!
//! The identity flow continues across a full-page redirect to the tenant's own
//! subdomain (see [`tenant_redirect_url`]) where [`IdentityToken`] is consumed.

mod identity;
mod local;

use std::future::Future;

pub use identity::{
    authorize_url, tenant_redirect_url, IdentityExchange, IdentityToken, ProviderIdentity,
    CALLBACK_PATH, IDENTITY_PATH,
};
pub use local::LocalCredentials;

use crate::client::Api;
use crate::error::ApiError;
use crate::models::SignInGrant;
use crate::transport::Transport;

/// Something that can trade what the user proved for a session grant.
pub trait Authenticator {
    fn authenticate<T: Transport>(
        &self,
        api: &Api<T>,
    ) -> impl Future<Output = Result<SignInGrant, ApiError>>;
}
