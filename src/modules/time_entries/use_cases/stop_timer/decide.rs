// Pure decision for stopping (and pausing) the running timer.
//
// - Rejected with NoRunningTimer when the sheet is idle.
// - Duration is whole seconds from start to stop, never negative.
// - Empty description or notes do not overwrite stored values.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::timer_stopped::TimerStoppedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::{RunningEntry, TimeSheetState};
use crate::modules::time_entries::use_cases::stop_timer::command::StopTimer;
use crate::shared::core::primitives::seconds_between;

pub(crate) fn close_running(
    running: &RunningEntry,
    user_id: &str,
    stopped_at: i64,
    description: Option<String>,
    notes: Option<String>,
) -> TimerStoppedV1 {
    TimerStoppedV1 {
        time_entry_id: running.time_entry_id.clone(),
        user_id: user_id.to_string(),
        stopped_at,
        duration: seconds_between(running.started_at, stopped_at),
        description: description.filter(|d| !d.is_empty()),
        notes: notes.filter(|n| !n.is_empty()),
    }
}

pub fn decide_stop(state: &TimeSheetState, command: StopTimer) -> Decision {
    let Some(running) = &state.running else {
        return Decision::Rejected {
            reason: DecideError::NoRunningTimer,
        };
    };
    let stopped = close_running(
        running,
        &command.user_id,
        command.stopped_at,
        command.description,
        command.notes,
    );
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimerStoppedV1(stopped.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryStopped { payload: stopped }],
    }
}
