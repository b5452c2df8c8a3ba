//! Then steps for task status update BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use tasktrack::task::{
    domain::{TaskDomainErrorKind, TaskStatus},
    ports::TaskRepository,
    services::{TaskServiceError, TaskView},
};

fn stored_task(world: &TaskStatusWorld) -> Result<TaskView, eyre::Report> {
    let id = world.current_task()?.id;
    Ok(run_async(world.service.get_by_id(id))?)
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = stored_task(world)?;

    eyre::ensure!(
        task.status == expected,
        "expected status {expected}, found {}",
        task.status
    );
    Ok(())
}

#[then("the stored task has a completion date")]
fn stored_task_has_completion_date(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    let completed_at = task
        .completion_date
        .ok_or_else(|| eyre::eyre!("expected a completion date"))?;
    eyre::ensure!(
        completed_at >= task.creation_date,
        "completion precedes creation"
    );
    Ok(())
}

#[then("the stored task has no completion date")]
fn stored_task_has_no_completion_date(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    eyre::ensure!(
        task.completion_date.is_none(),
        "expected no completion date, found {:?}",
        task.completion_date
    );
    Ok(())
}

#[then("the status update fails with a validation error")]
fn status_update_fails_with_validation(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_status_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing status update result"))?;

    eyre::ensure!(
        matches!(result, Err(TaskServiceError::Validation(_))),
        "expected Validation error, got {result:?}"
    );
    Ok(())
}

#[then("task creation fails with an invalid argument error")]
fn creation_fails_with_invalid_argument(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result"))?;

    eyre::ensure!(
        matches!(
            result,
            Err(TaskServiceError::Domain(err)) if err.kind() == TaskDomainErrorKind::InvalidArgument
        ),
        "expected invalid argument error, got {result:?}"
    );
    Ok(())
}

#[then("no tasks are stored")]
fn no_tasks_are_stored(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.repository.find_all())?;
    eyre::ensure!(stored.is_empty(), "expected an empty store, found {stored:?}");
    Ok(())
}
