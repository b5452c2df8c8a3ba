//! Request bodies accepted by the task endpoints.

use crate::task::{
    domain::{TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskRequest, UpdateTaskStatusRequest},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskBody {
    /// Title of the new task.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateTaskBody> for CreateTaskRequest {
    fn from(body: CreateTaskBody) -> Self {
        Self::new(body.title).with_optional_description(body.description)
    }
}

/// Body of `PUT /api/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskBody {
    /// Identifier; must match the path.
    pub id: TaskId,
    /// Replacement title.
    pub title: String,
    /// Replacement description; omitted clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// Accepted for compatibility and ignored by the update.
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

impl From<UpdateTaskBody> for UpdateTaskRequest {
    fn from(body: UpdateTaskBody) -> Self {
        Self::new(body.id, body.title)
            .with_optional_description(body.description)
            .with_optional_status(body.status)
    }
}

/// Body of `PATCH /api/tasks/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusBody {
    /// Identifier; must match the path.
    pub id: TaskId,
    /// Free-text status, parsed case-insensitively.
    pub status: String,
}

impl From<UpdateTaskStatusBody> for UpdateTaskStatusRequest {
    fn from(body: UpdateTaskStatusBody) -> Self {
        Self::new(body.id, body.status)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
