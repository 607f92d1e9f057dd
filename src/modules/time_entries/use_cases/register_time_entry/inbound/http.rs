use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::tasks::core::ports::owned_task;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterTimeEntryBody {
    pub task_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_billable: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<RegisterTimeEntryBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = body?;
    let task = owned_task(&*state.tasks, &body.task_id, &user_id).await?;

    let time_entry_id = Uuid::now_v7().to_string();
    let command = RegisterTimeEntry {
        time_entry_id: time_entry_id.clone(),
        user_id: user_id.clone(),
        task_id: task.task_id,
        project_id: task.project_id,
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        notes: body.notes,
        is_billable: body.is_billable.unwrap_or(task.is_billable),
        created_at: now_millis(),
    };
    state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_register(time_sheet, command))
        .await?;
    let entry = state.entry_view(&user_id, Some(&time_entry_id)).await?;
    tracing::info!(%user_id, %time_entry_id, duration = ?entry.duration, "time entry registered");
    Ok((StatusCode::CREATED, Json(entry)))
}
