//! Use-case handlers for task tracking.

use super::{
    CreateTaskRequest, TaskServiceError, TaskServiceResult, TaskView, UpdateTaskRequest,
    UpdateTaskStatusRequest,
};
use crate::task::{
    domain::{TIMESTAMP_PRECISION, Task, TaskId, TaskStatus, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::SubsecRound;
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Parses a free-text status, trimming and ignoring case.
///
/// # Errors
///
/// Returns [`TaskServiceError::Validation`] when the value is not a known
/// status name.
pub fn parse_status(raw: &str) -> TaskServiceResult<TaskStatus> {
    TaskStatus::try_from(raw).map_err(TaskServiceError::validation)
}

/// Task use-case service.
///
/// Each public method handles one operation: it validates input, loads and
/// mutates at most one task through the repository, and returns a
/// [`TaskView`]. The repository may be a trait object so the HTTP boundary
/// can pick a store at start-up.
pub struct TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a pending task and stores it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title is invalid (nothing
    /// is stored) or [`TaskServiceError::Repository`] when the insert fails.
    #[instrument(skip_all)]
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<TaskView> {
        let mut task = Task::new(request.title, request.description, &*self.clock)?;
        let id = self.repository.add(&task).await?;
        task.assign_id(id)?;
        info!(task_id = %id, "task created");
        Ok(TaskView::new(id, &task))
    }

    /// Replaces a task's title and description.
    ///
    /// The status carried by the request is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a non-positive id,
    /// [`TaskServiceError::Domain`] for an invalid title,
    /// [`TaskServiceError::NotFound`] when the task does not exist, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(task_id = %request.id))]
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskServiceResult<TaskView> {
        let UpdateTaskRequest {
            id,
            title,
            description,
            status,
        } = request;

        if !id.is_positive() {
            return Err(TaskServiceError::validation("task id must be provided"));
        }
        let validated_title = TaskTitle::new(title)?;

        let mut task = self.load(id).await?;
        if let Some(ignored) = status {
            debug!(status = %ignored, "status on generic update is not applied");
        }
        task.replace_title(validated_title);
        task.set_description(description);

        self.repository.update(&task).await?;
        info!("task updated");
        Ok(TaskView::new(id, &task))
    }

    /// Changes a task's status from free text, maintaining the completion
    /// timestamp.
    ///
    /// Moving to `Completed` stamps the completion date if none is set.
    /// Leaving `Completed` clears it. Any other change leaves it alone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist,
    /// [`TaskServiceError::Validation`] when the status does not parse, or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[instrument(skip_all, fields(task_id = %request.id))]
    pub async fn update_status(
        &self,
        request: UpdateTaskStatusRequest,
    ) -> TaskServiceResult<TaskView> {
        let UpdateTaskStatusRequest { id, status } = request;

        let mut task = self.load(id).await?;
        let target = parse_status(&status)?;

        let current = task.status();
        if target == TaskStatus::Completed && task.completion_date().is_none() {
            let now = self
                .clock
                .utc()
                .trunc_subsecs(TIMESTAMP_PRECISION)
                .max(task.creation_date());
            task.set_completion_date(Some(now))?;
        } else if target != TaskStatus::Completed && current == TaskStatus::Completed {
            task.set_completion_date(None)?;
        }
        task.set_status(target);

        self.repository.update(&task).await?;
        info!(from = %current, to = %target, "task status updated");
        Ok(TaskView::new(id, &task))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when persistence fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        self.load(id).await?;
        self.repository.delete(id).await?;
        info!("task deleted");
        Ok(())
    }

    /// Retrieves a single task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<TaskView> {
        let task = self.load(id).await?;
        Ok(TaskView::new(id, &task))
    }

    /// Lists every task, newest creation first. An empty store yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_all(&self) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_all().await?;
        project_all(&tasks)
    }

    /// Lists tasks with the given status, newest creation first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_by_status(&self, status: TaskStatus) -> TaskServiceResult<Vec<TaskView>> {
        let tasks = self.repository.find_by_status(status).await?;
        project_all(&tasks)
    }

    async fn load(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }
}

fn project_all(tasks: &[Task]) -> TaskServiceResult<Vec<TaskView>> {
    tasks
        .iter()
        .map(|task| -> TaskServiceResult<TaskView> {
            let id = task.id().ok_or(TaskRepositoryError::MissingIdentity)?;
            Ok(TaskView::new(id, task))
        })
        .collect()
}
