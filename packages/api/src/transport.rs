//! # Transport — the one place bytes leave the client
//!
//! [`Transport`] sends a fully prepared [`ApiRequest`] and hands back the raw
//! status + JSON body. It does no interpretation: deciding whether a response
//! is a rejection, an auth failure or a success belongs to [`crate::Api`].
//!
//! [`HttpTransport`] is the production implementation over a single
//! `reqwest::Client` built once with the configured timeout. On native
//! targets the timeout is enforced by the client; in the browser `reqwest`
//! delegates to `fetch`, which has no client-level timeout.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A request ready to go on the wire. `path` is relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Status code and decoded body of whatever the backend sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

impl RawResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async interface for sending requests.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, ApiError>>;
}

/// `reqwest`-backed transport used by the application.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        let client = builder.build().map_err(ApiError::from_reqwest)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &store::AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.into(), self.url(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(ApiError::from_reqwest)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::from_reqwest)?;

        Ok(RawResponse::new(status, decode_body(&text)))
    }
}

/// Empty bodies become `null`; non-JSON bodies are kept as a string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport =
            HttpTransport::new("https://api.example.com/", Duration::from_secs(50)).unwrap();
        assert_eq!(transport.base_url(), "https://api.example.com");
        assert_eq!(
            transport.url("/users/info"),
            "https://api.example.com/users/info"
        );
        assert_eq!(transport.url("stats"), "https://api.example.com/stats");
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(""), Value::Null);
        assert_eq!(decode_body("  "), Value::Null);
        assert_eq!(
            decode_body(r#"{"success":true}"#),
            serde_json::json!({"success": true})
        );
        assert_eq!(
            decode_body("Bad Gateway"),
            Value::String("Bad Gateway".into())
        );
    }

    #[test]
    fn test_request_lookups() {
        let mut request = ApiRequest::new(Method::Delete, "/feedback");
        request.query.push(("id".into(), "f1".into()));
        request.headers.push(("x-access-token", "t".into()));
        assert_eq!(request.query_param("id"), Some("f1"));
        assert_eq!(request.header("X-Access-Token"), Some("t"));
        assert_eq!(request.header("x-subdomain"), None);
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }
}
