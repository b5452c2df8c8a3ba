//! Request payloads for task use-cases.

use crate::task::domain::{TaskId, TaskStatus};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(super) title: String,
    pub(super) description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets or clears the task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Request payload for replacing a task's title and description.
///
/// A status may be supplied but the update use-case does not apply it;
/// status changes go through [`UpdateTaskStatusRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    pub(super) id: TaskId,
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) status: Option<TaskStatus>,
}

impl UpdateTaskRequest {
    /// Creates a request for the given task and new title. The description
    /// is cleared unless one is supplied.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            status: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets or clears the task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Records the status sent by the caller.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Records the status sent by the caller, if any.
    #[must_use]
    pub const fn with_optional_status(mut self, status: Option<TaskStatus>) -> Self {
        self.status = status;
        self
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the status sent by the caller, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}

/// Request payload for changing a task's status from free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    pub(super) id: TaskId,
    pub(super) status: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a request. `status` is parsed case-insensitively after
    /// trimming.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }

    /// Returns the target task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }
}
