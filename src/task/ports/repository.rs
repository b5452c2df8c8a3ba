//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Listing operations return tasks newest creation first.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every task, newest creation first.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task and returns the identifier assigned to it.
    ///
    /// Any identifier already carried by `task` is ignored.
    async fn add(&self, task: &Task) -> TaskRepositoryResult<TaskId>;

    /// Persists the full field set of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::MissingIdentity`] when the task was
    /// never stored, or [`TaskRepositoryError::NotFound`] when the record no
    /// longer exists.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Removes a task if present. Deleting a missing task is a no-op.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Returns tasks with the given status, newest creation first.
    async fn find_by_status(&self, status: TaskStatus) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task has no store-assigned identifier.
    #[error("task has not been stored yet")]
    MissingIdentity,

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
