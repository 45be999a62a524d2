use serde_json::Value;

use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::{Recognition, RecognitionPayload};
use crate::transport::{Method, Transport};

const PATH: &str = "/recognition";

impl<T: Transport> Api<T> {
    pub async fn recognitions(&self) -> ApiResult<Vec<Recognition>> {
        self.get(PATH, RequestOptions::authenticated()).await
    }

    pub async fn create_recognition(&self, payload: &RecognitionPayload) -> ApiResult<Value> {
        self.send_json(Method::Post, PATH, payload, true).await
    }

    pub async fn update_recognition(&self, payload: &RecognitionPayload) -> ApiResult<Value> {
        self.send_json(Method::Put, PATH, payload, true).await
    }

    pub async fn delete_recognition(&self, id: &str) -> ApiResult<Value> {
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
    async fn test_list_decodes_references() {
        let transport = MockTransport::new();
        transport.respond_ok(
            Method::Get,
            PATH,
            json!([{
                "_id": "r1",
                "fromUser": "u1",
                "toUser": "u2",
                "companyValue": "v1",
                "description": "Thanks for the review"
            }]),
        );
        let api = Api::new(transport, Arc::new(MemoryStore::with_token("t")));

        let list = api.recognitions().await.unwrap().into_data().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].company_value.id(), "v1");
    }
}
