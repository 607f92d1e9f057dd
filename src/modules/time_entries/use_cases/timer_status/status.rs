// What the timer looks like right now: the running entry, if any, and whole seconds elapsed.

use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::shared::core::primitives::seconds_between;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStatusView {
    pub is_running: bool,
    pub current_entry: Option<TimeEntryView>,
    pub elapsed_time: i64,
}

impl TimerStatusView {
    pub fn idle() -> Self {
        Self {
            is_running: false,
            current_entry: None,
            elapsed_time: 0,
        }
    }
}

pub fn timer_status(running: Option<TimeEntryView>, now_ms: i64) -> TimerStatusView {
    match running {
        Some(entry) => TimerStatusView {
            is_running: true,
            elapsed_time: seconds_between(entry.start_time, now_ms),
            current_entry: Some(entry),
        },
        None => TimerStatusView::idle(),
    }
}
