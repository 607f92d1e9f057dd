// Pure decision for deleting an entry. A running entry can be deleted too; the timer is then
// idle without a stop being recorded.

use crate::modules::time_entries::core::decision::{DecideError, Decision};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::delete_time_entry::command::DeleteTimeEntry;

pub fn decide_delete(state: &TimeSheetState, command: DeleteTimeEntry) -> Decision {
    if !state.knows(&command.time_entry_id) {
        return Decision::Rejected {
            reason: DecideError::EntryNotFound,
        };
    }
    let deleted = TimeEntryDeletedV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        deleted_at: command.deleted_at,
    };
    Decision::Accepted {
        events: vec![TimeEntryEvent::TimeEntryDeletedV1(deleted.clone())],
        intents: vec![TimeEntryIntent::PublishTimeEntryDeleted { payload: deleted }],
    }
}
