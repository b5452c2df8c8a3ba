//! Client-side error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`super::TaskApiClient`].
#[derive(Debug, Error)]
pub enum TaskClientError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Message from the `{"message": ...}` body, or the raw body text.
        message: String,
    },
}

impl TaskClientError {
    /// HTTP status for [`TaskClientError::Api`] failures.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(_) => None,
        }
    }
}

/// Result type for client operations.
pub type TaskClientResult<T> = Result<T, TaskClientError>;
