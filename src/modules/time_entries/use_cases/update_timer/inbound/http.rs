use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::update_timer::command::UpdateTimer;
use crate::modules::time_entries::use_cases::update_timer::decide::decide_update;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateTimerBody {
    pub description: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    body: Result<Json<UpdateTimerBody>, JsonRejection>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let Json(body) = body?;
    let command = UpdateTimer {
        user_id: user_id.clone(),
        description: body.description,
        updated_at: now_millis(),
    };
    let committed = state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_update(time_sheet, command))
        .await?;
    let entry = state
        .entry_view(&user_id, committed.touched_entry_id())
        .await?;
    Ok(Json(entry))
}
