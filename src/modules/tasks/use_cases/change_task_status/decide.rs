// Pure decision for moving a task through its lifecycle.
//
// - Completing stamps `completed_at`; reopening clears it.
// - Archiving deactivates the task. An archived task is final.

use crate::modules::tasks::core::task::{Task, TaskStatus};
use crate::modules::tasks::use_cases::change_task_status::command::ChangeTaskStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChangeTaskStatusError {
    #[error("archived tasks cannot change status")]
    Archived,
}

pub fn decide_change_status(
    mut task: Task,
    command: ChangeTaskStatus,
) -> Result<Task, ChangeTaskStatusError> {
    if task.status == command.status {
        return Ok(task);
    }
    if task.status == TaskStatus::Archived {
        return Err(ChangeTaskStatusError::Archived);
    }

    match command.status {
        TaskStatus::Completed => task.completed_at = Some(command.changed_at),
        TaskStatus::Todo | TaskStatus::InProgress => task.completed_at = None,
        TaskStatus::Archived => task.is_active = false,
    }
    task.status = command.status;
    task.updated_at = command.changed_at;
    Ok(task)
}
