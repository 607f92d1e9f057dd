use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeEntriesParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort_desc: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    params: Result<Query<ListTimeEntriesParams>, QueryRejection>,
) -> Result<Json<Vec<TimeEntryView>>, ApiError> {
    let Query(params) = params?;
    let entries = state
        .queries
        .list_by_user_id(
            &user_id,
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(20),
            params.sort_desc.unwrap_or(true),
        )
        .await?;
    Ok(Json(entries))
}

pub async fn handle_one(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(time_entry_id): Path<String>,
) -> Result<Json<TimeEntryView>, ApiError> {
    let entry = state.entry_view(&user_id, Some(&time_entry_id)).await?;
    Ok(Json(entry))
}
