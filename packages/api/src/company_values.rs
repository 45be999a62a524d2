use serde_json::Value;

use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::{CompanyValue, CompanyValuePayload};
use crate::transport::{Method, Transport};

const PATH: &str = "/company-values";

impl<T: Transport> Api<T> {
    pub async fn company_values(&self) -> ApiResult<Vec<CompanyValue>> {
        self.get(PATH, RequestOptions::authenticated()).await
    }

    pub async fn create_company_value(&self, payload: &CompanyValuePayload) -> ApiResult<Value> {
        self.send_json(Method::Post, PATH, payload, true).await
    }

    pub async fn update_company_value(&self, payload: &CompanyValuePayload) -> ApiResult<Value> {
        self.send_json(Method::Put, PATH, payload, true).await
    }

    pub async fn delete_company_value(&self, id: &str) -> ApiResult<Value> {
        self.delete_by_id(PATH, id).await
    }
}
