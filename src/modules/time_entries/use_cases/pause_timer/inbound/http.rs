// Pausing closes the running entry like a stop, without touching description or notes.
// There is no resume: the next start opens a new entry.

use axum::{Json, extract::State};

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::stop_timer::command::StopTimer;
use crate::modules::time_entries::use_cases::stop_timer::decide::decide_stop;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<TimeEntryView>, ApiError> {
    let command = StopTimer {
        user_id: user_id.clone(),
        description: None,
        notes: None,
        stopped_at: now_millis(),
    };
    let committed = state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_stop(time_sheet, command))
        .await?;
    let entry = state
        .entry_view(&user_id, committed.touched_entry_id())
        .await?;
    tracing::info!(%user_id, time_entry_id = %entry.time_entry_id, "timer paused");
    Ok(Json(entry))
}
