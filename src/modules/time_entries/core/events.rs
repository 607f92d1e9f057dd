// Root event enumeration for a user's time sheet stream.
//
// - Prefer additive changes. A breaking change gets a new versioned payload and variant.
// - Never change the meaning of historical events.

pub mod v1 {
    pub mod time_entry_deleted;
    pub mod time_entry_edited;
    pub mod time_entry_registered;
    pub mod time_entry_validated;
    pub mod timer_description_updated;
    pub mod timer_started;
    pub mod timer_stopped;
}

use v1::time_entry_deleted::TimeEntryDeletedV1;
use v1::time_entry_edited::TimeEntryEditedV1;
use v1::time_entry_registered::TimeEntryRegisteredV1;
use v1::time_entry_validated::TimeEntryValidatedV1;
use v1::timer_description_updated::TimerDescriptionUpdatedV1;
use v1::timer_started::TimerStartedV1;
use v1::timer_stopped::TimerStoppedV1;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimerStartedV1(TimerStartedV1),
    TimerStoppedV1(TimerStoppedV1),
    TimerDescriptionUpdatedV1(TimerDescriptionUpdatedV1),
    TimeEntryRegisteredV1(TimeEntryRegisteredV1),
    TimeEntryValidatedV1(TimeEntryValidatedV1),
    TimeEntryEditedV1(TimeEntryEditedV1),
    TimeEntryDeletedV1(TimeEntryDeletedV1),
}

impl TimeEntryEvent {
    pub fn time_entry_id(&self) -> &str {
        match self {
            TimeEntryEvent::TimerStartedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimerStoppedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimerDescriptionUpdatedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryRegisteredV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryValidatedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryEditedV1(e) => &e.time_entry_id,
            TimeEntryEvent::TimeEntryDeletedV1(e) => &e.time_entry_id,
        }
    }
}
