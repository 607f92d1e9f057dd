// Pure decision function for manual registration.
//
// - End time must be after start time.
// - An entry id can only be registered once per time sheet.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::primitives::seconds_between;

pub fn decide_register(state: &TimeSheetState, command: RegisterTimeEntry) -> Decision {
    if state.knows(&command.time_entry_id) {
        return Decision::Rejected {
            reason: DecideError::AlreadyExists,
        };
    }
    if command.end_time <= command.start_time {
        return Decision::Rejected {
            reason: DecideError::InvalidInterval,
        };
    }

    let registered = TimeEntryRegisteredV1 {
        duration: seconds_between(command.start_time, command.end_time),
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        task_id: command.task_id,
        project_id: command.project_id,
        start_time: command.start_time,
        end_time: command.end_time,
        description: command.description,
        notes: command.notes,
        is_billable: command.is_billable,
        created_at: command.created_at,
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryRegisteredV1(registered.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryRegistered {
            payload: registered,
        }],
    }
}
