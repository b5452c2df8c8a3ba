//! In-memory integration tests for task listings.

use super::helpers::{TestService, service};
use rstest::rstest;
use tasktrack::task::{
    domain::{TaskId, TaskStatus},
    services::{CreateTaskRequest, UpdateTaskStatusRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_tracks_status_changes(service: TestService) -> eyre::Result<()> {
    let mut ids = Vec::new();
    for title in ["Alpha", "Beta", "Gamma", "Delta"] {
        ids.push(service.create(CreateTaskRequest::new(title)).await?.id);
    }
    let [alpha, beta, gamma, delta] = ids.as_slice() else {
        eyre::bail!("expected four tasks");
    };
    service
        .update_status(UpdateTaskStatusRequest::new(*beta, "InProgress"))
        .await?;
    service
        .update_status(UpdateTaskStatusRequest::new(*delta, "Completed"))
        .await?;

    let ids_with = |views: Vec<tasktrack::task::services::TaskView>| -> Vec<TaskId> {
        views.into_iter().map(|view| view.id).collect()
    };
    let pending = ids_with(service.get_by_status(TaskStatus::Pending).await?);
    let in_progress = ids_with(service.get_by_status(TaskStatus::InProgress).await?);
    let completed = ids_with(service.get_by_status(TaskStatus::Completed).await?);

    eyre::ensure!(pending == vec![*gamma, *alpha], "got {pending:?}");
    eyre::ensure!(in_progress == vec![*beta], "got {in_progress:?}");
    eyre::ensure!(completed == vec![*delta], "got {completed:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_newest_first(service: TestService) -> eyre::Result<()> {
    let first = service.create(CreateTaskRequest::new("First")).await?;
    let second = service.create(CreateTaskRequest::new("Second")).await?;

    let all: Vec<TaskId> = service
        .get_all()
        .await?
        .into_iter()
        .map(|view| view.id)
        .collect();

    eyre::ensure!(all == vec![second.id, first.id], "got {all:?}");
    Ok(())
}
