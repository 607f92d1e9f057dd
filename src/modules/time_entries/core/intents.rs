// Intents are facts the outside world should hear about once the events are committed.
// They become outbox rows for timesheet sync and notification consumers.

use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::events::v1::time_entry_edited::TimeEntryEditedV1;
use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
use crate::modules::time_entries::core::events::v1::timer_stopped::TimerStoppedV1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryIntent {
    PublishTimeEntryStopped { payload: TimerStoppedV1 },
    PublishTimeEntryRegistered { payload: TimeEntryRegisteredV1 },
    PublishTimeEntryEdited { payload: TimeEntryEditedV1 },
    PublishTimeEntryDeleted { payload: TimeEntryDeletedV1 },
}
