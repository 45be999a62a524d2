//! How a failed operation is shown to the user.

use api::{ApiError, ErrorKind};

use crate::forms::FieldErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Caught locally, nothing was sent.
    Validation(FieldErrors),
    /// The backend said no; its message is shown verbatim.
    Rejected(String),
    /// Nothing came back.
    Transport,
    /// The session is no longer valid.
    Unauthorized(String),
}

impl Failure {
    pub fn message(&self) -> String {
        match self {
            Failure::Validation(_) => "Please fill in the highlighted fields.".to_string(),
            Failure::Rejected(message) | Failure::Unauthorized(message) => message.clone(),
            Failure::Transport => api::TRANSPORT_MESSAGE.to_string(),
        }
    }

    /// Whether the stored token should be dropped.
    pub fn expires_session(&self) -> bool {
        matches!(self, Failure::Unauthorized(_))
    }
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        match err.kind() {
            ErrorKind::Rejected => Failure::Rejected(err.to_string()),
            ErrorKind::Unauthorized => Failure::Unauthorized(err.to_string()),
            ErrorKind::Transport => Failure::Transport,
        }
    }
}

impl From<store::StoreError> for Failure {
    fn from(err: store::StoreError) -> Self {
        tracing::error!(error = %err, "token store failed");
        Failure::Rejected(err.to_string())
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}
