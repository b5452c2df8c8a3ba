//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Broad classification of domain failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDomainErrorKind {
    /// A field-level constraint was violated.
    InvalidArgument,
    /// The requested transition is not allowed from the current state.
    InvalidOperation,
}

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The title is empty or whitespace only.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The title is longer than [`super::TaskTitle::MAX_CHARS`].
    #[error("title cannot exceed {max} characters (got {length})")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The completion date precedes the creation date.
    #[error("completion date {completed_at} cannot be before creation date {created_at}")]
    CompletionBeforeCreation {
        /// Task creation timestamp.
        created_at: DateTime<Utc>,
        /// Rejected completion timestamp.
        completed_at: DateTime<Utc>,
    },

    /// A completed task cannot move back to in-progress.
    #[error("cannot mark a completed task as in progress")]
    CompletedTaskCannotResume,

    /// The task already carries a store-assigned identifier.
    #[error("task already has identifier {0}")]
    IdentityAlreadyAssigned(TaskId),
}

impl TaskDomainError {
    /// Classifies the error for boundary mapping.
    #[must_use]
    pub const fn kind(&self) -> TaskDomainErrorKind {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } | Self::CompletionBeforeCreation { .. } => {
                TaskDomainErrorKind::InvalidArgument
            }
            Self::CompletedTaskCannotResume | Self::IdentityAlreadyAssigned(_) => {
                TaskDomainErrorKind::InvalidOperation
            }
        }
    }
}

/// Error returned while parsing a task status from free text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid status '{0}', accepted values: {accepted}", accepted = TaskStatus::accepted_values())]
pub struct ParseTaskStatusError(pub String);
