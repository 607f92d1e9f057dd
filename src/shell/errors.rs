// Maps every layer's error onto an HTTP status and a `{"detail": ...}` body.

use crate::modules::tasks::core::ports::TaskAccessError;
use crate::modules::tasks::use_cases::change_task_status::decide::ChangeTaskStatusError;
use crate::modules::tasks::use_cases::create_task::decide::CreateTaskError;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandlerError;
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Could not validate credentials")]
    Unauthorized,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(source: impl std::fmt::Display) -> Self {
        tracing::error!(error = %source, "request failed");
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<DecideError> for ApiError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::NoRunningTimer => ApiError::BadRequest(error.to_string()),
            DecideError::EntryNotFound => ApiError::NotFound(error.to_string()),
            other => ApiError::Conflict(other.to_string()),
        }
    }
}

impl From<TaskAccessError> for ApiError {
    fn from(error: TaskAccessError) -> Self {
        match error {
            TaskAccessError::NotFound => ApiError::NotFound(error.to_string()),
            TaskAccessError::Forbidden => ApiError::Forbidden(error.to_string()),
            TaskAccessError::Backend(_) => ApiError::internal(error),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(reason) => reason.into(),
            ApplicationError::Task(reason) => reason.into(),
            ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. }) => {
                ApiError::Conflict("The time sheet was changed concurrently, retry".into())
            }
            other => ApiError::internal(other),
        }
    }
}

impl From<CreateTaskHandlerError> for ApiError {
    fn from(error: CreateTaskHandlerError) -> Self {
        match error {
            CreateTaskHandlerError::Domain(CreateTaskError::EmptyTitle) => {
                ApiError::Unprocessable(CreateTaskError::EmptyTitle.to_string())
            }
            CreateTaskHandlerError::Domain(CreateTaskError::ParentNotFound) => {
                ApiError::NotFound(CreateTaskError::ParentNotFound.to_string())
            }
            CreateTaskHandlerError::Domain(reason) => ApiError::BadRequest(reason.to_string()),
            CreateTaskHandlerError::Backend(source) => ApiError::internal(source),
        }
    }
}

impl From<ChangeTaskStatusError> for ApiError {
    fn from(error: ChangeTaskStatusError) -> Self {
        ApiError::Conflict(error.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::internal(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Unprocessable(rejection.body_text())
    }
}
