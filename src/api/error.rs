//! Maps use-case failures to HTTP responses.

use crate::task::{
    domain::TaskDomainErrorKind, ports::TaskRepositoryError, services::TaskServiceError,
};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for failures whose detail stays in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed task does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request conflicts with the task's current state.
    #[error("{0}")]
    Conflict(String),

    /// Anything else; the source is logged but never returned.
    #[error("internal error: {0}")]
    Internal(#[source] TaskServiceError),
}

impl ApiError {
    /// Builds a [`ApiError::BadRequest`] from any displayable value.
    #[must_use]
    pub fn bad_request(message: impl std::fmt::Display) -> Self {
        Self::BadRequest(message.to_string())
    }

    /// Status code returned for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::NotFound(_)
            | TaskServiceError::Repository(TaskRepositoryError::NotFound(_)) => {
                Self::NotFound(err.to_string())
            }
            TaskServiceError::Validation(message) => Self::BadRequest(message),
            TaskServiceError::Domain(domain) => match domain.kind() {
                TaskDomainErrorKind::InvalidArgument => Self::bad_request(domain),
                TaskDomainErrorKind::InvalidOperation => Self::Conflict(domain.to_string()),
            },
            TaskServiceError::Repository(_) => Self::Internal(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::Internal(source) => {
                tracing::error!(error = %source, detail = ?source, "task request failed");
                INTERNAL_ERROR_MESSAGE.to_owned()
            }
            Self::BadRequest(message) | Self::NotFound(message) | Self::Conflict(message) => {
                message.clone()
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
