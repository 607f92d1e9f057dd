use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::validate_time_entry::command::ValidateTimeEntry;
use crate::modules::time_entries::use_cases::validate_time_entry::decide::decide_validate;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(time_entry_id): Path<String>,
) -> Result<Json<TimeEntryView>, ApiError> {
    state
        .ensure_entry_owner(&user_id, &time_entry_id, "validate")
        .await?;
    let command = ValidateTimeEntry {
        time_entry_id: time_entry_id.clone(),
        user_id: user_id.clone(),
        validated_by: user_id.clone(),
        validated_at: now_millis(),
    };
    state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_validate(time_sheet, command))
        .await?;
    let entry = state.entry_view(&user_id, Some(&time_entry_id)).await?;
    Ok(Json(entry))
}
