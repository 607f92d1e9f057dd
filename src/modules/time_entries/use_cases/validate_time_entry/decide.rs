// Pure decision for validating a closed entry.
//
// Validating an already validated entry is accepted without events.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_validated::TimeEntryValidatedV1;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::validate_time_entry::command::ValidateTimeEntry;

pub fn decide_validate(state: &TimeSheetState, command: ValidateTimeEntry) -> Decision {
    if state
        .running
        .as_ref()
        .is_some_and(|r| r.time_entry_id == command.time_entry_id)
    {
        return Decision::Rejected {
            reason: DecideError::EntryStillRunning,
        };
    }
    match state.closed.get(&command.time_entry_id) {
        None => Decision::Rejected {
            reason: DecideError::EntryNotFound,
        },
        Some(closed) if closed.is_validated => Decision::unchanged(),
        Some(_) => Decision::Accepted {
            events: vec![TimeEntryEvent::TimeEntryValidatedV1(TimeEntryValidatedV1 {
                time_entry_id: command.time_entry_id,
                user_id: command.user_id,
                validated_by: command.validated_by,
                validated_at: command.validated_at,
            })],
            intents: vec![],
        },
    }
}
