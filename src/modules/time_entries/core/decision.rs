use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::intents::TimeEntryIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("time entry already exists")]
    AlreadyExists,

    #[error("end time must be after start time")]
    InvalidInterval,

    #[error("No running timer found")]
    NoRunningTimer,

    #[error("Time entry not found")]
    EntryNotFound,

    #[error("time entry is still running")]
    EntryStillRunning,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        events: Vec<TimeEntryEvent>,
        intents: Vec<TimeEntryIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn unchanged() -> Self {
        Decision::Accepted {
            events: Vec::new(),
            intents: Vec::new(),
        }
    }
}
