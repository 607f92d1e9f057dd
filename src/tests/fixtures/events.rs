// Canonical event instances, derived from the command builders.

use crate::modules::time_entries::core::events::v1::time_entry_deleted::TimeEntryDeletedV1;
use crate::modules::time_entries::core::events::v1::time_entry_edited::TimeEntryEditedV1;
use crate::modules::time_entries::core::events::v1::time_entry_registered::TimeEntryRegisteredV1;
use crate::modules::time_entries::core::events::v1::timer_started::TimerStartedV1;
use crate::modules::time_entries::core::events::v1::timer_stopped::TimerStoppedV1;
use crate::tests::fixtures::commands::{
    FIXED_CREATED_AT, RegisterTimeEntryBuilder, StartTimerBuilder,
};

pub fn make_timer_started_v1_event() -> TimerStartedV1 {
    let command = StartTimerBuilder::new().build();
    TimerStartedV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        task_id: command.task_id,
        project_id: command.project_id,
        description: command.description,
        is_billable: command.is_billable,
        started_at: command.started_at,
    }
}

/// Stops the canonical started entry 25 minutes later.
pub fn make_timer_stopped_v1_event() -> TimerStoppedV1 {
    let started = make_timer_started_v1_event();
    TimerStoppedV1 {
        time_entry_id: started.time_entry_id,
        user_id: started.user_id,
        stopped_at: started.started_at + 1_500_000,
        duration: 1_500,
        description: None,
        notes: Some("Ready for review".to_string()),
    }
}

pub fn make_time_entry_registered_v1_event() -> TimeEntryRegisteredV1 {
    let command = RegisterTimeEntryBuilder::new()
        .time_entry_id("te-fixed-0100")
        .build();
    TimeEntryRegisteredV1 {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        task_id: command.task_id,
        project_id: command.project_id,
        start_time: command.start_time,
        end_time: command.end_time,
        duration: (command.end_time - command.start_time) / 1_000,
        description: command.description,
        notes: command.notes,
        is_billable: command.is_billable,
        created_at: command.created_at,
    }
}

/// Moves an entry to a ten minute slot an hour after the canonical start.
pub fn make_time_entry_edited_v1_event(time_entry_id: &str) -> TimeEntryEditedV1 {
    let start_time = FIXED_CREATED_AT + 3_600_000;
    TimeEntryEditedV1 {
        time_entry_id: time_entry_id.to_string(),
        user_id: "user-fixed-0001".to_string(),
        start_time,
        end_time: start_time + 600_000,
        duration: 600,
        description: Some("Corrected".to_string()),
        notes: None,
        edited_at: FIXED_CREATED_AT + 7_200_000,
    }
}

pub fn make_time_entry_deleted_v1_event(time_entry_id: &str) -> TimeEntryDeletedV1 {
    TimeEntryDeletedV1 {
        time_entry_id: time_entry_id.to_string(),
        user_id: "user-fixed-0001".to_string(),
        deleted_at: FIXED_CREATED_AT + 7_200_000,
    }
}
