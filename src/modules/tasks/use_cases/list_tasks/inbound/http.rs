use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use crate::modules::tasks::core::ports::owned_task;
use crate::modules::tasks::use_cases::list_tasks::summary::{TaskSummaryView, summarize};
use crate::shell::auth::CurrentUser;
use crate::shell::errors::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTasksParams {
    pub include_inactive: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    params: Result<Query<ListTasksParams>, QueryRejection>,
) -> Result<Json<Vec<TaskSummaryView>>, ApiError> {
    let Query(params) = params?;
    let tasks = state
        .tasks
        .list_by_user(&user_id, params.include_inactive.unwrap_or(false))
        .await?;
    let times = state.queries.time_by_task(&user_id).await?;
    Ok(Json(summarize(tasks, &times)))
}

pub async fn handle_one(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(task_id): Path<String>,
) -> Result<Json<TaskSummaryView>, ApiError> {
    let task = owned_task(&*state.tasks, &task_id, &user_id).await?;
    let times = state.queries.time_by_task(&user_id).await?;
    let summary = summarize(vec![task], &times)
        .pop()
        .ok_or_else(|| ApiError::NotFound("Task not found".into()))?;
    Ok(Json(summary))
}
