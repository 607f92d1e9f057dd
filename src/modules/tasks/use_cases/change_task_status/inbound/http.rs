use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::modules::tasks::core::ports::owned_task;
use crate::modules::tasks::core::task::{Task, TaskStatus};
use crate::modules::tasks::use_cases::change_task_status::command::ChangeTaskStatus;
use crate::modules::tasks::use_cases::change_task_status::decide::decide_change_status;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ChangeTaskStatusBody {
    pub status: TaskStatus,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(task_id): Path<String>,
    body: Result<Json<ChangeTaskStatusBody>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(body) = body?;
    let task = owned_task(&*state.tasks, &task_id, &user_id).await?;
    let command = ChangeTaskStatus {
        task_id,
        user_id,
        status: body.status,
        changed_at: now_millis(),
    };
    let task = decide_change_status(task, command)?;
    state.tasks.save(task.clone()).await?;
    tracing::info!(task_id = %task.task_id, status = ?task.status, "task status changed");
    Ok(Json(task))
}
