use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartTimerBody {
    pub task_id: String,
    pub description: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<StartTimerBody>, JsonRejection>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let Json(body) = body?;
    let committed = state
        .start_handler
        .handle(&user_id, &body.task_id, body.description, now_millis())
        .await?;
    let entry = state
        .entry_view(&user_id, committed.touched_entry_id())
        .await?;
    Ok(Json(entry))
}
