//! When steps for task status update BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use tasktrack::task::services::{CreateTaskRequest, UpdateTaskStatusRequest};

#[when(r#"the task status is set to "{status}""#)]
fn set_task_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.current_task()?.id;
    let result = run_async(
        world
            .service
            .update_status(UpdateTaskStatusRequest::new(id, status)),
    );
    if let Ok(ref updated) = result {
        world.current_task = Some(updated.clone());
    }
    world.last_status_result = Some(result);
    Ok(())
}

#[when("a task is created with a title of {length:usize} characters")]
fn create_task_with_title_length(world: &mut TaskStatusWorld, length: usize) {
    let title = "t".repeat(length);
    world.last_create_result = Some(run_async(world.service.create(CreateTaskRequest::new(title))));
}
