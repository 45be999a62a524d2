//! # API client wrapper
//!
//! [`Api`] is the single entry point every domain function goes through. It
//! owns a [`Transport`], reads the session token from the [`TokenStore`] at
//! call time, attaches the tenant header, and normalises whatever comes back
//! into `Result<ApiResponse<T>, ApiError>`:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx with a JSON envelope | `Ok(ApiResponse)` (may still carry `success == false`) |
//! | 2xx with an empty body | `Ok(ApiResponse::empty())` |
//! | 401 / 403 | `Err(ApiError::Unauthorized(message))` |
//! | other non-2xx | `Err(ApiError::Rejected { status, message })` |
//! | no response | `Err(ApiError::Transport)` from the transport |
//!
//! A missing or blank `message` in an error body falls back to
//! [`GENERIC_MESSAGE`]. Nothing is retried.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::TokenStore;

use crate::error::{ApiError, ApiResult, GENERIC_MESSAGE};
use crate::response::ApiResponse;
use crate::transport::{ApiRequest, Method, RawResponse, Transport};

/// Header carrying the session credential.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
/// Header carrying the tenant subdomain.
pub const SUBDOMAIN_HEADER: &str = "x-subdomain";

/// Per-call options for [`Api::request`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub authenticated: bool,
}

impl RequestOptions {
    pub fn public() -> Self {
        Self::default()
    }

    pub fn authenticated() -> Self {
        Self {
            authenticated: true,
            ..Self::default()
        }
    }

    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::unexpected)?);
        Ok(self)
    }
}

/// Configured client: transport + token store + tenant.
#[derive(Clone)]
pub struct Api<T> {
    transport: T,
    tokens: Arc<dyn TokenStore>,
    tenant: Option<String>,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            transport,
            tokens,
            tenant: None,
        }
    }

    pub fn with_tenant(mut self, tenant: Option<String>) -> Self {
        self.tenant = tenant;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn tokens(&self) -> &dyn TokenStore {
        self.tokens.as_ref()
    }

    pub fn tenant(&self) -> Option<&str> {
        self.tenant.as_deref()
    }

    /// Send one request and normalise the response.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<R> {
        let mut request = ApiRequest::new(method, path);
        request.query = options.query;
        request.body = options.body;
        if options.authenticated {
            request.headers = self.auth_headers();
        }

        tracing::debug!(%method, path, "api request");
        let raw = self.transport.send(request).await.inspect_err(|e| {
            tracing::error!(%method, path, error = ?e, "api request failed before a response");
        })?;
        normalize(raw)
    }

    pub(crate) async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<R> {
        self.request(Method::Get, path, options).await
    }

    pub(crate) async fn send_json<R: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        authenticated: bool,
    ) -> ApiResult<R> {
        let options = if authenticated {
            RequestOptions::authenticated()
        } else {
            RequestOptions::public()
        };
        self.request(method, path, options.body(body)?).await
    }

    pub(crate) async fn delete_by_id(&self, path: &str, id: &str) -> ApiResult<Value> {
        self.request(
            Method::Delete,
            path,
            RequestOptions::authenticated().query("id", id),
        )
        .await
    }

    fn auth_headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(token) = self.tokens.get() {
            headers.push((ACCESS_TOKEN_HEADER, token));
        }
        if let Some(tenant) = &self.tenant {
            headers.push((SUBDOMAIN_HEADER, tenant.clone()));
        }
        headers
    }
}

fn normalize<R: DeserializeOwned>(raw: RawResponse) -> ApiResult<R> {
    if raw.is_success() {
        if raw.body.is_null() {
            return Ok(ApiResponse::empty());
        }
        return serde_json::from_value(raw.body).map_err(|e| {
            tracing::error!(status = raw.status, error = %e, "undecodable response body");
            ApiError::unexpected(e)
        });
    }

    let message = raw
        .body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(GENERIC_MESSAGE)
        .to_string();

    tracing::warn!(status = raw.status, %message, "api request rejected");
    match raw.status {
        401 | 403 => Err(ApiError::Unauthorized(message)),
        status => Err(ApiError::rejected(status, message)),
    }
}
