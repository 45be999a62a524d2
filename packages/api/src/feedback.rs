use serde_json::Value;

use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::{Feedback, FeedbackPayload};
use crate::transport::{Method, Transport};

const PATH: &str = "/feedback";

impl<T: Transport> Api<T> {
    pub async fn feedback(&self) -> ApiResult<Vec<Feedback>> {
        self.get(PATH, RequestOptions::authenticated()).await
    }

    pub async fn create_feedback(&self, payload: &FeedbackPayload) -> ApiResult<Value> {
        self.send_json(Method::Post, PATH, payload, true).await
    }

    /// `payload.id` selects the record.
    pub async fn update_feedback(&self, payload: &FeedbackPayload) -> ApiResult<Value> {
        self.send_json(Method::Put, PATH, payload, true).await
    }

    pub async fn delete_feedback(&self, id: &str) -> ApiResult<Value> {
        self.delete_by_id(PATH, id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;
    use store::MemoryStore;

    use super::*;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_update_carries_id_in_body() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Put, PATH, Value::Null);
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));

        let payload = FeedbackPayload {
            id: Some("f1".into()),
            description: "Great pairing session".into(),
            is_anonymous: true,
        };
        api.update_feedback(&payload).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(
            sent.body,
            Some(json!({"id": "f1", "description": "Great pairing session", "isAnonymous": true}))
        );
    }

    #[tokio::test]
    async fn test_delete_uses_query() {
        let transport = MockTransport::new();
        transport.respond_ok(Method::Delete, PATH, Value::Null);
        let api = Api::new(transport.clone(), Arc::new(MemoryStore::with_token("t")));

        api.delete_feedback("f9").await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.query_param("id"), Some("f9"));
        assert_eq!(sent.body, None);
    }
}
