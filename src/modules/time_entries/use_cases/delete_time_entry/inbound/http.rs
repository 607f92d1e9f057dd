use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;
use crate::modules::time_entries::use_cases::delete_time_entry::decide::decide_delete;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(time_entry_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .ensure_entry_owner(&user_id, &time_entry_id, "delete")
        .await?;
    let command = DeleteTimeEntry {
        time_entry_id: time_entry_id.clone(),
        user_id: user_id.clone(),
        deleted_at: now_millis(),
    };
    state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_delete(time_sheet, command))
        .await?;
    tracing::info!(%user_id, %time_entry_id, "time entry deleted");
    Ok(StatusCode::NO_CONTENT)
}
