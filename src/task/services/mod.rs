//! Application services for task tracking use-cases.

mod error;
mod requests;
mod tasks;
mod view;

pub use error::{TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, UpdateTaskRequest, UpdateTaskStatusRequest};
pub use tasks::{TaskService, parse_status};
pub use view::TaskView;
