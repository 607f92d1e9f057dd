use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};

use crate::modules::tasks::use_cases::change_task_status::inbound::http as change_task_status_http;
use crate::modules::tasks::use_cases::create_task::inbound::http as create_task_http;
use crate::modules::tasks::use_cases::list_tasks::inbound::http as list_tasks_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::edit_time_entry::inbound::http as edit_http;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::http as list_http;
use crate::modules::time_entries::use_cases::pause_timer::inbound::http as pause_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_http;
use crate::modules::time_entries::use_cases::start_timer::inbound::http as start_http;
use crate::modules::time_entries::use_cases::stop_timer::inbound::http as stop_http;
use crate::modules::time_entries::use_cases::switch_task::inbound::http as switch_http;
use crate::modules::time_entries::use_cases::timer_stats::inbound::http as stats_http;
use crate::modules::time_entries::use_cases::timer_status::inbound::http as status_http;
use crate::modules::time_entries::use_cases::update_timer::inbound::http as update_http;
use crate::modules::time_entries::use_cases::validate_time_entry::inbound::http as validate_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, api_prefix: &str) -> Router {
    let api = Router::new()
        .route("/timer/status", get(status_http::handle))
        .route("/timer/start", post(start_http::handle))
        .route("/timer/pause", post(pause_http::handle))
        .route("/timer/stop", post(stop_http::handle))
        .route("/timer/update", put(update_http::handle))
        .route("/timer/switch/{task_id}", post(switch_http::handle))
        .route("/timer/stats", get(stats_http::handle))
        .route(
            "/time-entries",
            get(list_http::handle).post(register_http::handle),
        )
        .route(
            "/time-entries/{time_entry_id}",
            get(list_http::handle_one)
                .put(edit_http::handle)
                .delete(delete_http::handle),
        )
        .route(
            "/time-entries/{time_entry_id}/validate",
            post(validate_http::handle),
        )
        .route(
            "/tasks",
            get(list_tasks_http::handle).post(create_task_http::handle),
        )
        .route("/tasks/{task_id}", get(list_tasks_http::handle_one))
        .route("/tasks/{task_id}/status", put(change_task_status_http::handle));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest(api_prefix, api)
        .with_state(state)
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": state.project_name,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
