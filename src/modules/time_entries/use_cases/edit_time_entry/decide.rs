// Pure decision for correcting a closed entry.
//
// - Running entries are edited through the timer, not here.
// - Absent bounds keep the stored ones; the duration follows the resolved interval.
// - An edit that changes nothing is accepted without events.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_edited::TimeEntryEditedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::shared::core::primitives::seconds_between;

pub fn decide_edit(state: &TimeSheetState, command: EditTimeEntry) -> Decision {
    if state
        .running
        .as_ref()
        .is_some_and(|r| r.time_entry_id == command.time_entry_id)
    {
        return Decision::Rejected {
            reason: DecideError::EntryStillRunning,
        };
    }
    let Some(closed) = state.closed.get(&command.time_entry_id) else {
        return Decision::Rejected {
            reason: DecideError::EntryNotFound,
        };
    };

    let start_time = command.start_time.unwrap_or(closed.start_time);
    let end_time = command.end_time.unwrap_or(closed.end_time);
    if end_time <= start_time {
        return Decision::Rejected {
            reason: DecideError::InvalidInterval,
        };
    }
    let description = command.description.filter(|d| !d.is_empty());
    let notes = command.notes.filter(|n| !n.is_empty());
    let moved = start_time != closed.start_time || end_time != closed.end_time;
    if !moved && description.is_none() && notes.is_none() {
        return Decision::unchanged();
    }

    let edited = TimeEntryEditedV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        start_time,
        end_time,
        duration: seconds_between(start_time, end_time),
        description,
        notes,
        edited_at: command.edited_at,
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryEditedV1(edited.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryEdited { payload: edited }],
    }
}
