//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskStatus, TaskTitle};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;

/// Sub-second digits kept on task timestamps; matches `TIMESTAMPTZ`.
pub const TIMESTAMP_PRECISION: u16 = 6;

/// Task aggregate root.
///
/// Field-level rules (title length, completion after creation) and the
/// status transitions are enforced here, independent of storage or
/// transport. The identifier stays `None` until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    title: TaskTitle,
    description: Option<String>,
    creation_date: DateTime<Utc>,
    completion_date: Option<DateTime<Utc>>,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completion_date: Option<DateTime<Utc>>,
    /// Persisted status.
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new pending task stamped with the current clock time,
    /// truncated to microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::TitleTooLong`] when the title is invalid.
    pub fn new(
        title: impl Into<String>,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let validated_title = TaskTitle::new(title)?;
        Ok(Self {
            id: None,
            title: validated_title,
            description,
            creation_date: clock.utc().trunc_subsecs(TIMESTAMP_PRECISION),
            completion_date: None,
            status: TaskStatus::Pending,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: Some(data.id),
            title: data.title,
            description: data.description,
            creation_date: data.creation_date,
            completion_date: data.completion_date,
            status: data.status,
        }
    }

    /// Returns the store-assigned identifier, if the task has been stored.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completion_date(&self) -> Option<DateTime<Utc>> {
        self.completion_date
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Records the identifier assigned by the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::IdentityAlreadyAssigned`] when the task
    /// already has an identifier.
    pub const fn assign_id(&mut self, id: TaskId) -> Result<(), TaskDomainError> {
        if let Some(existing) = self.id {
            return Err(TaskDomainError::IdentityAlreadyAssigned(existing));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Same rules as [`Task::new`]. The task is unchanged on failure.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        self.replace_title(TaskTitle::new(title)?);
        Ok(())
    }

    /// Replaces the title with one that has already been validated.
    pub fn replace_title(&mut self, title: TaskTitle) {
        self.title = title;
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Sets or clears the completion timestamp.
    ///
    /// Setting a timestamp also forces the status to
    /// [`TaskStatus::Completed`]; the timestamp is the authority. Clearing it
    /// leaves the status alone.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletionBeforeCreation`] when `date`
    /// precedes the creation timestamp. The task is unchanged on failure.
    pub fn set_completion_date(
        &mut self,
        date: Option<DateTime<Utc>>,
    ) -> Result<(), TaskDomainError> {
        if let Some(completed_at) = date {
            if completed_at < self.creation_date {
                return Err(TaskDomainError::CompletionBeforeCreation {
                    created_at: self.creation_date,
                    completed_at,
                });
            }
            self.status = TaskStatus::Completed;
        }
        self.completion_date = date;
        Ok(())
    }

    /// Overwrites the status field only.
    ///
    /// The completion timestamp is not touched; callers that change status
    /// this way own the timestamp bookkeeping.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Moves the task to [`TaskStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::CompletedTaskCannotResume`] when the task
    /// is completed. The task is unchanged on failure.
    pub const fn mark_in_progress(&mut self) -> Result<(), TaskDomainError> {
        if matches!(self.status, TaskStatus::Completed) {
            return Err(TaskDomainError::CompletedTaskCannotResume);
        }
        self.status = TaskStatus::InProgress;
        Ok(())
    }

    /// Completes the task, refreshing the completion timestamp.
    pub fn mark_completed(&mut self, clock: &impl Clock) {
        // Clamp so a clock that trails the stored creation time cannot break
        // the completion-after-creation rule.
        let now = clock
            .utc()
            .trunc_subsecs(TIMESTAMP_PRECISION)
            .max(self.creation_date);
        self.status = TaskStatus::Completed;
        self.completion_date = Some(now);
    }

    /// Returns the task to [`TaskStatus::Pending`], clearing any completion
    /// timestamp.
    pub const fn mark_pending(&mut self) {
        self.completion_date = None;
        self.status = TaskStatus::Pending;
    }
}
