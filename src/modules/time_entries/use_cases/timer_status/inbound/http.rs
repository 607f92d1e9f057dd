use axum::{Json, extract::State};

use crate::modules::time_entries::use_cases::timer_status::status::{TimerStatusView, timer_status};
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<TimerStatusView>, ApiError> {
    let time_sheet = state.time_sheets.current_state(&user_id).await?;
    let running = match time_sheet.running {
        Some(running) => {
            state
                .queries
                .get_by_id(&user_id, &running.time_entry_id)
                .await?
        }
        None => None,
    };
    Ok(Json(timer_status(running, now_millis())))
}
