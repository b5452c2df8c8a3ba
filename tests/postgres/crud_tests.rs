//! CRUD tests for the `PostgreSQL` task repository.

use super::helpers::TestDatabase;
use mockable::DefaultClock;
use rstest::rstest;
use tasktrack::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

fn new_task(title: &str, description: Option<&str>) -> eyre::Result<Task> {
    Ok(Task::new(
        title,
        description.map(str::to_owned),
        &DefaultClock,
    )?)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn add_and_load_round_trip() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let repository = database.repository();
    let task = new_task("Buy milk", Some("Two litres"))?;

    let id = repository.add(&task).await?;
    let loaded = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("stored task should load"))?;

    eyre::ensure!(loaded.id() == Some(id));
    eyre::ensure!(loaded.title().as_str() == "Buy milk");
    eyre::ensure!(loaded.description() == Some("Two litres"));
    eyre::ensure!(loaded.status() == TaskStatus::Pending);
    eyre::ensure!(loaded.completion_date().is_none());
    eyre::ensure!(
        loaded.creation_date() == task.creation_date(),
        "stored creation date {} differs from {}",
        loaded.creation_date(),
        task.creation_date()
    );

    database.drop_schema().await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn update_persists_status_and_clears_fields() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let repository = database.repository();
    let id = repository.add(&new_task("Report", Some("Draft"))?).await?;
    let mut stored = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("stored task should load"))?;

    stored.set_description(None);
    stored.mark_completed(&DefaultClock);
    repository.update(&stored).await?;
    let completed = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("updated task should load"))?;
    eyre::ensure!(completed.description().is_none());
    eyre::ensure!(completed.status() == TaskStatus::Completed);
    eyre::ensure!(completed.completion_date().is_some());

    stored.mark_pending();
    repository.update(&stored).await?;
    let reopened = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("reopened task should load"))?;
    eyre::ensure!(reopened.status() == TaskStatus::Pending);
    eyre::ensure!(reopened.completion_date().is_none());

    database.drop_schema().await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn update_and_delete_of_missing_rows() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let repository = database.repository();
    let id = repository.add(&new_task("Gone", None)?).await?;
    let stored = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| eyre::eyre!("stored task should load"))?;

    repository.delete(id).await?;
    repository.delete(id).await?;
    let result = repository.update(&stored).await;

    eyre::ensure!(repository.find_by_id(id).await?.is_none());
    eyre::ensure!(matches!(result, Err(TaskRepositoryError::NotFound(missing)) if missing == id));
    eyre::ensure!(matches!(
        repository.update(&new_task("Unsaved", None)?).await,
        Err(TaskRepositoryError::MissingIdentity)
    ));

    database.drop_schema().await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires TASKTRACK_TEST_DATABASE_URL"]
async fn listings_are_newest_first_and_filtered() -> eyre::Result<()> {
    let database = TestDatabase::connect().await?;
    let repository = database.repository();
    let first = repository.add(&new_task("First", None)?).await?;
    let second = repository.add(&new_task("Second", None)?).await?;
    let third = repository.add(&new_task("Third", None)?).await?;
    let mut done = repository
        .find_by_id(second)
        .await?
        .ok_or_else(|| eyre::eyre!("stored task should load"))?;
    done.mark_completed(&DefaultClock);
    repository.update(&done).await?;

    let all: Vec<Option<TaskId>> = repository.find_all().await?.iter().map(Task::id).collect();
    let pending: Vec<Option<TaskId>> = repository
        .find_by_status(TaskStatus::Pending)
        .await?
        .iter()
        .map(Task::id)
        .collect();

    eyre::ensure!(all == vec![Some(third), Some(second), Some(first)], "got {all:?}");
    eyre::ensure!(pending == vec![Some(third), Some(first)], "got {pending:?}");
    eyre::ensure!(repository.find_by_status(TaskStatus::InProgress).await?.is_empty());

    database.drop_schema().await
}
