//! HTTP client for the task API.
//!
//! [`TaskApiClient`] mirrors the server's endpoints one method per route and
//! holds no business rules of its own. Non-success responses surface as
//! [`TaskClientError::Api`] carrying the server's `message`.

mod error;

pub use error::{TaskClientError, TaskClientResult};

use crate::{
    api::{CreateTaskBody, ErrorBody, UpdateTaskBody, UpdateTaskStatusBody},
    task::{
        domain::{TaskId, TaskStatus},
        services::TaskView,
    },
};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Client for the `/api/tasks` endpoints.
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    client: Client,
    base_url: String,
}

impl TaskApiClient {
    /// Creates a client for the server rooted at `base_url`
    /// (for example `http://localhost:8080`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client,
            base_url: base.trim_end_matches('/').to_owned(),
        }
    }

    /// Server root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists every task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError`] on transport failure or a non-success
    /// response.
    pub async fn get_all_tasks(&self) -> TaskClientResult<Vec<TaskView>> {
        let response = self.client.get(self.tasks_url("")).send().await?;
        decode(response).await
    }

    /// Fetches one task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Api`] with status 404 when the task does
    /// not exist.
    pub async fn get_task(&self, id: TaskId) -> TaskClientResult<TaskView> {
        let response = self
            .client
            .get(self.tasks_url(&format!("/{id}")))
            .send()
            .await?;
        decode(response).await
    }

    /// Lists tasks with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError`] on transport failure or a non-success
    /// response.
    pub async fn get_tasks_by_status(&self, status: TaskStatus) -> TaskClientResult<Vec<TaskView>> {
        let response = self
            .client
            .get(self.tasks_url(&format!("/status/{status}")))
            .send()
            .await?;
        decode(response).await
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Api`] with status 400 when the title is
    /// rejected.
    pub async fn create_task(&self, body: &CreateTaskBody) -> TaskClientResult<TaskView> {
        let response = self
            .client
            .post(self.tasks_url(""))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// Replaces a task's title and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError`] on transport failure or a non-success
    /// response.
    pub async fn update_task(&self, body: &UpdateTaskBody) -> TaskClientResult<TaskView> {
        let response = self
            .client
            .put(self.tasks_url(&format!("/{}", body.id)))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    /// Changes a task's status from free text.
    ///
    /// When the server answers with a success status but a body that does not
    /// decode as a task, the task is fetched again by id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Api`] when the server rejects the status or
    /// the task does not exist.
    pub async fn update_task_status(
        &self,
        id: TaskId,
        status: impl Into<String>,
    ) -> TaskClientResult<TaskView> {
        let body = UpdateTaskStatusBody {
            id,
            status: status.into(),
        };
        let response = self
            .client
            .patch(self.tasks_url(&format!("/{id}/status")))
            .json(&body)
            .send()
            .await?;
        let bytes = ensure_success(response).await?.bytes().await?;
        match serde_json::from_slice::<TaskView>(&bytes) {
            Ok(view) => Ok(view),
            Err(err) => {
                warn!(task_id = %id, error = %err, "status response did not decode; refetching task");
                self.get_task(id).await
            }
        }
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskClientError::Api`] with status 404 when the task does
    /// not exist.
    pub async fn delete_task(&self, id: TaskId) -> TaskClientResult<()> {
        let response = self
            .client
            .delete(self.tasks_url(&format!("/{id}")))
            .send()
            .await?;
        ensure_success(response).await?;
        Ok(())
    }

    fn tasks_url(&self, suffix: &str) -> String {
        format!("{}/api/tasks{suffix}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> TaskClientResult<T> {
    Ok(ensure_success(response).await?.json::<T>().await?)
}

async fn ensure_success(response: Response) -> TaskClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text).map_or(text, |body| body.message);
    debug!(%status, %message, "task API returned an error");
    Err(TaskClientError::Api { status, message })
}
