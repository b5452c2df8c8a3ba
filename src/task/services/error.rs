//! Service-level error types.

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Service-level errors for task use-cases.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation or transition rules rejected the change.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task exists with the requested identifier.
    #[error("task {0} was not found")]
    NotFound(TaskId),

    /// External input was malformed.
    #[error("{0}")]
    Validation(String),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskServiceError {
    /// Builds a [`TaskServiceError::Validation`] from any displayable value.
    pub fn validation(message: impl std::fmt::Display) -> Self {
        Self::Validation(message.to_string())
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;
