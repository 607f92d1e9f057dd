// Pure decision for creating a task.
//
// - The title must not be blank.
// - A parent must exist, belong to the same user, and must not itself be a sub-task.

use crate::modules::tasks::core::task::{DEFAULT_TASK_COLOR, Task, TaskStatus};
use crate::modules::tasks::use_cases::create_task::command::CreateTask;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CreateTaskError {
    #[error("task title must not be empty")]
    EmptyTitle,

    #[error("parent task not found")]
    ParentNotFound,

    #[error("sub-tasks cannot have sub-tasks")]
    NestedSubTask,
}

pub fn decide_create(parent: Option<&Task>, command: CreateTask) -> Result<Task, CreateTaskError> {
    let title = command.title.trim();
    if title.is_empty() {
        return Err(CreateTaskError::EmptyTitle);
    }
    if command.parent_task_id.is_some() {
        match parent {
            Some(p) if !p.is_owned_by(&command.user_id) => {
                return Err(CreateTaskError::ParentNotFound);
            }
            Some(p) if p.is_sub_task() => return Err(CreateTaskError::NestedSubTask),
            Some(_) => {}
            None => return Err(CreateTaskError::ParentNotFound),
        }
    }

    Ok(Task {
        task_id: command.task_id,
        user_id: command.user_id,
        title: title.to_string(),
        description: command.description,
        parent_task_id: command.parent_task_id,
        project_id: command.project_id,
        status: TaskStatus::Todo,
        priority: command.priority,
        estimated_minutes: command.estimated_minutes,
        tags: command.tags,
        color: command
            .color
            .unwrap_or_else(|| DEFAULT_TASK_COLOR.to_string()),
        due_date: command.due_date,
        is_active: true,
        is_billable: command.is_billable,
        created_at: command.created_at,
        updated_at: command.created_at,
        completed_at: None,
    })
}
