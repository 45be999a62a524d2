use serde::{Deserialize, Serialize};

use crate::error::{ApiError, GENERIC_MESSAGE};

/// The `{success, message, data}` envelope every endpoint answers with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Envelope for an empty 2xx body.
    pub fn empty() -> Self {
        Self {
            success: true,
            message: None,
            data: None,
        }
    }

    /// The message to surface, falling back to the generic one.
    pub fn message_or_default(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(GENERIC_MESSAGE)
    }

    /// Turn a `success == false` envelope into an error.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::rejected(200, self.message_or_default()))
        }
    }

    /// Successful envelope with data, or an error carrying the message.
    pub fn into_data(self) -> Result<T, ApiError> {
        let message = self.message_or_default().to_string();
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::rejected(200, message)),
        }
    }
}
