// Switching is a start on another task: whatever runs is closed in the same append.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SwitchTaskParams {
    pub description: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(task_id): Path<String>,
    params: Result<Query<SwitchTaskParams>, QueryRejection>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let Query(params) = params?;
    let committed = state
        .start_handler
        .handle(&user_id, &task_id, params.description, now_millis())
        .await?;
    let entry = state
        .entry_view(&user_id, committed.touched_entry_id())
        .await?;
    Ok(Json(entry))
}
