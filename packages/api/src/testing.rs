//! Recording transport for tests.
//!
//! Responses are queued per `(method, path)` and consumed in order. A request
//! with nothing queued fails as a transport error so a missing stub shows up
//! as a failed assertion rather than a hang.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::error::ApiError;
use crate::transport::{ApiRequest, Method, RawResponse, Transport};

type Reply = Result<RawResponse, ApiError>;

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    requests: Vec<ApiRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        let mut state = self.state.lock().unwrap();
        state
            .replies
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
    }

    /// Queue a raw status + body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.push(method, path, Ok(RawResponse::new(status, body)));
    }

    /// Queue `{success: true, message: "OK", data}` with status 200.
    pub fn respond_ok(&self, method: Method, path: &str, data: Value) {
        self.respond(
            method,
            path,
            200,
            json!({"success": true, "message": "OK", "data": data}),
        );
    }

    /// Queue `{success: false, message}` with status 200.
    pub fn respond_unsuccessful(&self, method: Method, path: &str, message: &str) {
        self.respond(method, path, 200, json!({"success": false, "message": message}));
    }

    /// Queue a failure where no response arrives.
    pub fn fail_transport(&self, method: Method, path: &str) {
        self.push(method, path, Err(ApiError::transport("connection refused")));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    /// Number of requests sent to `(method, path)`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// `(method, path)` of every request, in order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut state = self.state.lock().unwrap();
        let key = (request.method, request.path.clone());
        state.requests.push(request);
        state
            .replies
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ApiError::transport(format!("no stub for {} {}", key.0, key.1))))
    }
}
