// Pure decision for starting a timer.
//
// - A running entry is closed first, in the same decision, so the user never has two.
// - The closing stop is published like any other stop.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::timer_started::TimerStartedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::start_timer::command::StartTimer;
use crate::modules::time_entries::use_cases::stop_timer::decide::close_running;

pub fn decide_start(state: &TimeSheetState, command: StartTimer) -> Decision {
    if state.knows(&command.time_entry_id) {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }

    let mut events = Vec::with_capacity(2);
    let mut intents = Vec::with_capacity(1);
    if let Some(running) = &state.running {
        let stopped = close_running(running, &command.user_id, command.started_at, None, None);
        events.push(TimeEntryEvent::TimerStoppedV1(stopped.clone()));
        intents.push(TimeEntryIntent::PublishTimeEntryStopped { payload: stopped });
    }

    events.push(TimeEntryEvent::TimerStartedV1(TimerStartedV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        task_id: command.task_id,
        project_id: command.project_id,
        description: command.description,
        is_billable: command.is_billable,
        started_at: command.started_at,
    }));

    Decision::Accepted { events, intents }
}
