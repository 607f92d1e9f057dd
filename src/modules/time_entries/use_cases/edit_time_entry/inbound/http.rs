use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::modules::time_entries::use_cases::edit_time_entry::decide::decide_edit;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::now_millis;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditTimeEntryBody {
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(time_entry_id): Path<String>,
    body: Result<Json<EditTimeEntryBody>, JsonRejection>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let Json(body) = body?;
    state
        .ensure_entry_owner(&user_id, &time_entry_id, "edit")
        .await?;
    let command = EditTimeEntry {
        time_entry_id: time_entry_id.clone(),
        user_id: user_id.clone(),
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        notes: body.notes,
        edited_at: now_millis(),
    };
    let committed = state
        .time_sheets
        .handle(&user_id, |time_sheet| decide_edit(time_sheet, command))
        .await?;
    let entry = state.entry_view(&user_id, Some(&time_entry_id)).await?;
    if !committed.events.is_empty() {
        tracing::info!(%user_id, %time_entry_id, duration = ?entry.duration, "time entry edited");
    }
    Ok(Json(entry))
}

#[cfg(test)]
mod edit_time_entry_http_inbound_tests {
    use axum::{Router, http::StatusCode, routing::put};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
    use crate::shared::core::primitives::now_millis;
    use crate::shell::state::AppState;
    use crate::shell::state::test_support::{
        OTHER_USER, USER, authorized, json_body, make_state_with_task, make_test_state,
    };
    use crate::tests::fixtures::commands::RegisterTimeEntryBuilder;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/time-entries/{time_entry_id}", put(handle))
            .with_state(state)
    }

    async fn state_with_entry(user_id: &str) -> AppState {
        let state = make_test_state();
        let mut command = RegisterTimeEntryBuilder::new().build();
        command.user_id = user_id.to_string();
        state
            .time_sheets
            .handle(user_id, |time_sheet| decide_register(time_sheet, command))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn it_should_move_the_interval_and_recompute_the_duration() {
        let state = state_with_entry(USER).await;
        let response = app(state.clone())
            .oneshot(authorized(
                "PUT",
                "/time-entries/te-fixed-0001",
                Some(json!({ "end_time": 1_700_000_900_000i64, "notes": "Client call ran long" })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["start_time"], 1_700_000_000_000i64);
        assert_eq!(json["end_time"], 1_700_000_900_000i64);
        assert_eq!(json["duration"], 900);
        assert_eq!(json["notes"], "Client call ran long");
        assert_eq!(state.outbox.rows.lock().await.len(), 2);
    }

    #[tokio::test]
    async fn it_should_return_409_for_an_inverted_interval() {
        let response = app(state_with_entry(USER).await)
            .oneshot(authorized(
                "PUT",
                "/time-entries/te-fixed-0001",
                Some(json!({ "end_time": 1_699_999_000_000i64 })),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_409_while_the_entry_runs() {
        let (state, task) = make_state_with_task("task-1").await;
        let started = state
            .start_handler
            .handle(USER, &task.task_id, None, now_millis())
            .await
            .unwrap();
        let uri = format!("/time-entries/{}", started.touched_entry_id().unwrap());

        let response = app(state)
            .oneshot(authorized("PUT", &uri, Some(json!({ "description": "Late" }))))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_refuse_foreign_and_unknown_entries() {
        let state = state_with_entry(OTHER_USER).await;
        let response = app(state.clone())
            .oneshot(authorized(
                "PUT",
                "/time-entries/te-fixed-0001",
                Some(json!({ "description": "Mine now" })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            json_body(response).await["detail"],
            "Not authorized to edit this entry"
        );

        let response = app(state)
            .oneshot(authorized("PUT", "/time-entries/te-404", Some(json!({}))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
