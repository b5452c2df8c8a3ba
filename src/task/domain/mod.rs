//! Domain model for task tracking.
//!
//! The task domain holds the entity, its validated fields, and the status
//! transition rules, keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError, TaskDomainErrorKind};
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, TIMESTAMP_PRECISION, Task};
pub use title::TaskTitle;
