// Server configuration read from the environment (optionally seeded from `.env` by main).

use std::collections::HashMap;
use std::env;
use thiserror::Error;

pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8000",
    "https://localhost:3000",
    "https://localhost:8000",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("TIMETRACK_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("TIMETRACK_API_PREFIX must start with '/' and not end with it, got {0:?}")]
    InvalidPrefix(String),

    #[error("TIMETRACK_API_TOKENS entries must look like token=user_id, got {0:?}")]
    InvalidToken(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_prefix: String,
    pub project_name: String,
    pub cors_origins: Vec<String>,
    /// Bearer token to user id.
    pub api_tokens: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("TIMETRACK_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("TIMETRACK_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };
        let api_prefix = lookup("TIMETRACK_API_PREFIX").unwrap_or_else(|| "/api/v1".to_string());
        if !api_prefix.starts_with('/') || api_prefix.len() < 2 || api_prefix.ends_with('/') {
            return Err(ConfigError::InvalidPrefix(api_prefix));
        }
        let project_name =
            lookup("TIMETRACK_PROJECT_NAME").unwrap_or_else(|| "TimeTrack API".to_string());
        let cors_origins = match lookup("TIMETRACK_CORS_ORIGINS") {
            Some(raw) => split_list(&raw).map(str::to_string).collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };
        let api_tokens = match lookup("TIMETRACK_API_TOKENS") {
            Some(raw) => parse_tokens(&raw)?,
            None => HashMap::new(),
        };

        Ok(Self {
            host,
            port,
            api_prefix,
            project_name,
            cors_origins,
            api_tokens,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_tokens(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    split_list(raw)
        .map(|pair| match pair.split_once('=') {
            Some((token, user)) if !token.trim().is_empty() && !user.trim().is_empty() => {
                Ok((token.trim().to_string(), user.trim().to_string()))
            }
            _ => Err(ConfigError::InvalidToken(pair.to_string())),
        })
        .collect()
}
