use axum::{Json, extract::State};

use crate::modules::time_entries::use_cases::timer_stats::stats::{TimerStatsView, timer_stats};
use crate::shared::core::primitives::{now_millis, utc_day_bounds};
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<TimerStatsView>, ApiError> {
    let (today, tomorrow) = utc_day_bounds(now_millis());
    let today_total = state
        .queries
        .total_duration(&user_id, today, tomorrow)
        .await?;
    let is_running = state.time_sheets.current_state(&user_id).await?.is_running();
    Ok(Json(timer_stats(today_total, is_running)))
}

#[cfg(test)]
mod timer_stats_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::get};
    use tower::ServiceExt;

    use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
    use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
    use crate::shared::core::primitives::{now_millis, utc_day_bounds};
    use crate::shell::state::AppState;
    use crate::shell::state::test_support::{USER, authorized, json_body, make_state_with_task};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/timer/stats", get(handle))
            .with_state(state)
    }

    async fn register(state: &AppState, id: &str, start_time: i64, seconds: i64) {
        let command = RegisterTimeEntry {
            time_entry_id: id.into(),
            user_id: USER.into(),
            task_id: "task-1".into(),
            project_id: None,
            start_time,
            end_time: start_time + seconds * 1_000,
            description: None,
            notes: None,
            is_billable: true,
            created_at: start_time,
        };
        state
            .time_sheets
            .handle(USER, |time_sheet| decide_register(time_sheet, command))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn it_should_sum_todays_closed_entries() {
        let (state, task) = make_state_with_task("task-1").await;
        let (today, _) = utc_day_bounds(now_millis());
        register(&state, "te-today-1", today, 3_600).await;
        register(&state, "te-today-2", today + 1_000, 1_800).await;
        register(&state, "te-yesterday", today - 86_400_000, 7_200).await;
        state
            .start_handler
            .handle(USER, &task.task_id, None, now_millis())
            .await
            .unwrap();

        let response = app(state)
            .oneshot(authorized("GET", "/timer/stats", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            serde_json::json!({ "today_total": 5_400, "today_hours": 1.5, "is_running": true })
        );
    }
}
