// Bearer token authentication. Issuing tokens is someone else's job: the server only resolves
// a presented token to a user id.

use crate::shell::errors::ApiError;
use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::collections::HashMap;

pub trait SessionResolver: Send + Sync {
    fn resolve(&self, token: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySessions {
    tokens: HashMap<String, String>,
}

impl InMemorySessions {
    pub fn new(tokens: HashMap<String, String>) -> Self {
        Self { tokens }
    }

    pub fn with_token(mut self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        self.tokens.insert(token.into(), user_id.into());
        self
    }
}

impl SessionResolver for InMemorySessions {
    fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).cloned()
    }
}

/// The authenticated caller, extracted from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::Unauthorized)?;
        match state.sessions.resolve(token) {
            Some(user_id) => Ok(CurrentUser(user_id)),
            None => {
                tracing::debug!("rejected unknown bearer token");
                Err(ApiError::Unauthorized)
            }
        }
    }
}
