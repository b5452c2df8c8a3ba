//! Task endpoint handlers.

use super::{
    AppState,
    dto::{CreateTaskBody, HealthBody, UpdateTaskBody, UpdateTaskStatusBody},
    error::{ApiError, ApiResult},
};
use crate::task::{
    domain::TaskId,
    services::{TaskView, parse_status},
};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, patch},
};

/// Routes under `/api/tasks` plus `/health`.
#[must_use]
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/status/{status}", get(list_tasks_by_status))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/status", patch(update_task_status))
}

#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

/// GET /api/tasks
async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskView>>> {
    Ok(Json(state.tasks().get_all().await?))
}

/// GET /api/tasks/status/{status}
async fn list_tasks_by_status(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ApiResult<Json<Vec<TaskView>>> {
    let status = parse_status(&raw)?;
    Ok(Json(state.tasks().get_by_status(status).await?))
}

/// GET /api/tasks/{id}
async fn get_task(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<TaskView>> {
    let Path(id) = path?;
    Ok(Json(state.tasks().get_by_id(TaskId::new(id)).await?))
}

/// POST /api/tasks
async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = payload?;
    let created = state.tasks().create(body.into()).await?;
    let location = format!("/api/tasks/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/tasks/{id}
async fn update_task(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTaskBody>, JsonRejection>,
) -> ApiResult<Json<TaskView>> {
    let Path(id) = path?;
    let Json(body) = payload?;
    ensure_ids_match(id, body.id)?;
    Ok(Json(state.tasks().update(body.into()).await?))
}

/// DELETE /api/tasks/{id}
async fn delete_task(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = path?;
    state.tasks().delete(TaskId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/tasks/{id}/status
async fn update_task_status(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateTaskStatusBody>, JsonRejection>,
) -> ApiResult<Json<TaskView>> {
    let Path(id) = path?;
    let Json(body) = payload?;
    ensure_ids_match(id, body.id)?;
    Ok(Json(state.tasks().update_status(body.into()).await?))
}

fn ensure_ids_match(path_id: i32, body_id: TaskId) -> ApiResult<()> {
    if body_id.value() == path_id {
        Ok(())
    } else {
        Err(ApiError::bad_request(format!(
            "path id {path_id} does not match body id {body_id}"
        )))
    }
}
