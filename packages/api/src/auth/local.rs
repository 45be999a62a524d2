use crate::client::Api;
use crate::error::ApiError;
use crate::models::{SignInGrant, SigninPayload};
use crate::transport::Transport;

use super::Authenticator;

/// Email and password entered on the sign-in screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalCredentials {
    pub email: String,
    pub password: String,
}

impl Authenticator for LocalCredentials {
    async fn authenticate<T: Transport>(&self, api: &Api<T>) -> Result<SignInGrant, ApiError> {
        let payload = SigninPayload {
            email: self.email.trim().to_string(),
            password: Some(self.password.clone()),
        };
        let grant = api.signin(&payload).await?.into_data()?;
        tracing::info!(email = %payload.email, "signed in with local credentials");
        Ok(grant)
    }
}
