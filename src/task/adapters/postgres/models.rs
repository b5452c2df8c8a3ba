//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Completion timestamp.
    pub completion_date: Option<DateTime<Utc>>,
    /// Symbolic status name.
    pub status: String,
}

/// Insert model for task records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Creation timestamp.
    pub creation_date: DateTime<Utc>,
    /// Completion timestamp.
    pub completion_date: Option<DateTime<Utc>>,
    /// Symbolic status name.
    pub status: String,
}

/// Full-row changeset for task updates.
///
/// `None` values are written as `NULL` so a cleared completion date is
/// persisted.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion timestamp.
    pub completion_date: Option<DateTime<Utc>>,
    /// Symbolic status name.
    pub status: String,
}
