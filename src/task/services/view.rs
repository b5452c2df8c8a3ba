//! Transport-friendly projection of a task.

use crate::task::domain::{Task, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task fields exposed across the API boundary.
///
/// Serializes with camelCase keys and the status as its symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Completion timestamp, if completed.
    pub completion_date: Option<DateTime<Utc>>,
    /// Current status.
    pub status: TaskStatus,
}

impl TaskView {
    /// Projects `task` under the given identifier.
    #[must_use]
    pub fn new(id: TaskId, task: &Task) -> Self {
        Self {
            id,
            title: task.title().as_str().to_owned(),
            description: task.description().map(str::to_owned),
            creation_date: task.creation_date(),
            completion_date: task.completion_date(),
            status: task.status(),
        }
    }
}
