use crate::modules::tasks::core::ports::TaskAccessError;
use crate::modules::time_entries::core::decision::DecideError;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shared::infrastructure::intent_outbox::OutboxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Outbox(#[from] OutboxError),

    #[error(transparent)]
    Task(#[from] TaskAccessError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
