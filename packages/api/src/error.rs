//! Normalised error shape for every backend call.

use thiserror::Error;

/// Shown when the request never produced a response.
pub const TRANSPORT_MESSAGE: &str = "It's not you, it's us, want to give it another try?";

/// Shown when nothing more specific is known.
pub const GENERIC_MESSAGE: &str = "Oops! Something went wrong.";

/// Coarse classification of a failure, used to decide how the UI reacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Show the backend message and keep going.
    Rejected,
    /// The session is gone: clear the token and sign in again.
    Unauthorized,
    /// Nothing came back; the user may retry.
    Transport,
}

/// Every failure a domain function can return.
///
/// The `Display` output is the user-facing notification text, so callers can
/// surface `err.to_string()` directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered and said no.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The backend answered 401/403: the session is not valid.
    #[error("{0}")]
    Unauthorized(String),

    /// No response reached us (connect failure, timeout, dropped connection).
    #[error("{}", TRANSPORT_MESSAGE)]
    Transport { detail: String },

    /// Anything else: request could not be built, body could not be decoded.
    #[error("{}", GENERIC_MESSAGE)]
    Unexpected { detail: String },
}

impl ApiError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn transport(detail: impl ToString) -> Self {
        Self::Transport {
            detail: detail.to_string(),
        }
    }

    pub fn unexpected(detail: impl ToString) -> Self {
        Self::Unexpected {
            detail: detail.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Unexpected failures are reported like a rejection with the generic text.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected { .. } | Self::Unexpected { .. } => ErrorKind::Rejected,
            Self::Unauthorized(_) => ErrorKind::Unauthorized,
            Self::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// Map a `reqwest` failure. `send` only errors when no response arrived,
    /// so everything except builder errors is a transport failure.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::unexpected(err)
        } else {
            Self::transport(err)
        }
    }
}

pub type ApiResult<T> = Result<crate::ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_user_facing() {
        assert_eq!(
            ApiError::rejected(400, "Email already invited").to_string(),
            "Email already invited"
        );
        assert_eq!(
            ApiError::transport("connection refused").to_string(),
            TRANSPORT_MESSAGE
        );
        assert_eq!(ApiError::unexpected("bad json").to_string(), GENERIC_MESSAGE);
        assert!(ApiError::Unauthorized("Invalid token".into()).is_unauthorized());
    }

    #[test]
    fn test_kind() {
        assert_eq!(ApiError::rejected(409, "taken").kind(), ErrorKind::Rejected);
        assert_eq!(ApiError::unexpected("eof").kind(), ErrorKind::Rejected);
        assert_eq!(ApiError::transport("timeout").kind(), ErrorKind::Transport);
        assert_eq!(
            ApiError::Unauthorized("expired".into()).kind(),
            ErrorKind::Unauthorized
        );
    }
}
