use crate::client::{Api, RequestOptions};
use crate::error::ApiResult;
use crate::models::Stats;
use crate::transport::Transport;

impl<T: Transport> Api<T> {
    /// Dashboard figures, scoped by the caller's role on the backend.
    pub async fn stats(&self) -> ApiResult<Stats> {
        self.get("/stats", RequestOptions::authenticated()).await
    }
}
