//! `/users/*`: account creation, sign-in, the user directory and the
//! signed-in user's own profile.

use serde_json::Value;

use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::{
    AcceptInvitePayload, InvitePayload, ProfilePayload, SignInGrant, SigninPayload,
    SignupPayload, UserInfo,
};
use crate::transport::{Method, Transport};

impl<T: Transport> Api<T> {
    /// Register a new organisation and its first (admin) user.
    pub async fn signup(&self, payload: &SignupPayload) -> ApiResult<Value> {
        self.send_json(Method::Post, "/users/signup", payload, false)
            .await
    }

    /// Exchange credentials (or a provider-verified email) for a token.
    pub async fn signin(&self, payload: &SigninPayload) -> ApiResult<SignInGrant> {
        self.send_json(Method::Post, "/users/signin", payload, false)
            .await
    }

    /// The user the stored token belongs to.
    pub async fn current_user(&self) -> ApiResult<UserInfo> {
        self.get("/users/info", RequestOptions::authenticated())
            .await
    }

    /// The directory. `all` includes users outside the caller's team.
    pub async fn users(&self, all: bool) -> ApiResult<Vec<UserInfo>> {
        let mut options = RequestOptions::authenticated();
        if all {
            options = options.query("all", true);
        }
        self.get("/users", options).await
    }

    pub async fn update_profile(&self, payload: &ProfilePayload) -> ApiResult<UserInfo> {
        self.send_json(Method::Put, "/users/profile", payload, true)
            .await
    }

    pub async fn invite(&self, payload: &InvitePayload) -> ApiResult<Value> {
        self.send_json(Method::Post, "/users/invite", payload, true)
            .await
    }

    /// Redeem the one-time token from an invitation email.
    pub async fn accept_invite(&self, email_token: &str) -> ApiResult<SignInGrant> {
        let payload = AcceptInvitePayload {
            email_token: email_token.to_string(),
        };
        self.send_json(Method::Post, "/users/accept-invite", &payload, false)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use store::MemoryStore;

    use crate::client::{Api, ACCESS_TOKEN_HEADER};
    use crate::models::Role;
    use crate::testing::MockTransport;
    use crate::transport::Method;

    use super::*;

    fn api(transport: &MockTransport) -> Api<MockTransport> {
        Api::new(transport.clone(), Arc::new(MemoryStore::with_token("tok")))
    }

    #[tokio::test]
    async fn test_current_user() {
        let transport = MockTransport::new();
        transport.respond_ok(
            Method::Get,
            "/users/info",
            json!({"_id": "u1", "firstName": "Ada", "email": "ada@acme.test", "role": "ADMIN"}),
        );

        let user = api(&transport).current_user().await.unwrap().into_data().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(
            transport.last_request().unwrap().header(ACCESS_TOKEN_HEADER),
            Some("tok")
        );
    }

    #[tokio::test]
    async fn test_users_all_flag() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Get, "/users", json!([]));
        transport.respond_ok(Method::Get, "/users", json!([]));
        let api = api(&transport);

        api.users(true).await.unwrap();
        assert_eq!(transport.last_request().unwrap().query_param("all"), Some("true"));

        api.users(false).await.unwrap();
        assert_eq!(transport.last_request().unwrap().query_param("all"), None);
    }

    #[tokio::test]
    async fn test_accept_invite_is_public() {
        let transport = MockTransport::new();
        transport.respond_ok(
            Method::Post,
            "/users/accept-invite",
            json!({"token": "fresh", "subdomain": "acme"}),
        );

        let grant = api(&transport)
            .accept_invite("email-tok")
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(grant.token, "fresh");

        let sent = transport.last_request().unwrap();
        assert!(sent.headers.is_empty());
        assert_eq!(sent.body, Some(json!({"emailToken": "email-tok"})));
    }
}
