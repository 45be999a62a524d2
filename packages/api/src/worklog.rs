use serde_json::Value;

use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::{Worklog, WorklogPayload};
use crate::transport::{Method, Transport};

const PATH: &str = "/worklog";

impl<T: Transport> Api<T> {
    pub async fn worklogs(&self) -> ApiResult<Vec<Worklog>> {
        self.get(PATH, RequestOptions::authenticated()).await
    }

    pub async fn create_worklog(&self, payload: &WorklogPayload) -> ApiResult<Value> {
        self.send_json(Method::Post, PATH, payload, true).await
    }

    pub async fn update_worklog(&self, payload: &WorklogPayload) -> ApiResult<Value> {
        self.send_json(Method::Put, PATH, payload, true).await
    }

    pub async fn delete_worklog(&self, id: &str) -> ApiResult<Value> {
        self.delete_by_id(PATH, id).await
    }
}
