use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::tasks::core::task::TaskPriority;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandler;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTaskBody {
    pub title: String,
    pub description: Option<String>,
    pub parent_task_id: Option<String>,
    pub project_id: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub estimated_minutes: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub color: Option<String>,
    pub due_date: Option<i64>,
    pub is_billable: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let command = CreateTask {
        task_id: Uuid::now_v7().to_string(),
        user_id,
        title: body.title,
        description: body.description,
        parent_task_id: body.parent_task_id,
        project_id: body.project_id,
        priority: body.priority,
        estimated_minutes: body.estimated_minutes,
        tags: body.tags,
        color: body.color,
        due_date: body.due_date,
        is_billable: body.is_billable.unwrap_or(true),
        created_at: now_millis(),
    };
    let task = CreateTaskHandler::new(state.tasks.clone())
        .handle(command)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}
