//! Use-case tests over the `PostgreSQL` task store.

use super::helpers::TestDatabase;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use tasktrack::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, TaskService, TaskServiceError, UpdateTaskStatusRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn status_updates_round_trip_through_postgres() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let service = TaskService::new(Arc::new(database.repository()), Arc::new(DefaultClock));

    let created = service.create(CreateTaskRequest::new("Water plants")).await?;
    let completed = service
        .update_status(UpdateTaskStatusRequest::new(created.id, "Completed"))
        .await?;
    let rejected = service
        .update_status(UpdateTaskStatusRequest::new(created.id, "InvalidStatus"))
        .await;
    let fetched = service.get_by_id(created.id).await?;

    eyre::ensure!(completed.status == TaskStatus::Completed);
    eyre::ensure!(matches!(rejected, Err(TaskServiceError::Validation(_))));
    eyre::ensure!(fetched.status == TaskStatus::Completed);
    eyre::ensure!(fetched.completion_date.is_some());

    database.drop_schema().await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn invalid_title_stores_nothing() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let service = TaskService::new(Arc::new(database.repository()), Arc::new(DefaultClock));

    let result = service.create(CreateTaskRequest::new("a".repeat(101))).await;

    eyre::ensure!(matches!(result, Err(TaskServiceError::Domain(_))));
    eyre::ensure!(service.get_all().await?.is_empty());

    database.drop_schema().await
}
