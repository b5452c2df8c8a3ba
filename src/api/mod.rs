//! HTTP boundary for the task use-cases.
//!
//! The router maps verbs and paths under `/api/tasks` onto
//! [`TaskService`] calls and translates failures into `{"message": ...}`
//! bodies with the matching status code. Handlers hold no business logic.

pub mod dto;
pub mod error;
mod routes;

pub use dto::{CreateTaskBody, HealthBody, UpdateTaskBody, UpdateTaskStatusBody};
pub use error::{ApiError, ApiResult, ErrorBody, INTERNAL_ERROR_MESSAGE};

use crate::task::{ports::TaskRepository, services::TaskService};
use axum::Router;
use mockable::DefaultClock;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Task service as held by the HTTP layer.
pub type SharedTaskService = TaskService<dyn TaskRepository, DefaultClock>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    tasks: SharedTaskService,
}

impl AppState {
    /// Builds state over any repository, using the system clock.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            tasks: TaskService::new(repository, Arc::new(DefaultClock)),
        }
    }

    /// The task use-case service.
    #[must_use]
    pub const fn tasks(&self) -> &SharedTaskService {
        &self.tasks
    }
}

/// Builds the full application router with tracing and CORS layers.
#[must_use]
pub fn router(state: AppState) -> Router {
    routes::router()
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
