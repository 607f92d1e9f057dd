use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::stop_timer::command::StopTimer;
use crate::modules::time_entries::use_cases::stop_timer::decide::decide_stop;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct StopTimerBody {
    pub description: Option<String>,
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<StopTimerBody>, JsonRejection>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let Json(body) = body?;
    let command = StopTimer {
        user_id: user_id.clone(),
        description: body.description,
        notes: body.notes,
        stopped_at: now_millis(),
    };
    let committed = state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_stop(time_sheet, command))
        .await?;
    let entry = state
        .entry_view(&user_id, committed.touched_entry_id())
        .await?;
    tracing::info!(%user_id, time_entry_id = %entry.time_entry_id, duration = ?entry.duration, "timer stopped");
    Ok(Json(entry))
}
