use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("not authenticated")]
    Unauthorized,

    #[error("server rejected the request ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}
