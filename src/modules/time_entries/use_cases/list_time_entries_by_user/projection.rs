// Read model for time entries and the mapping from time sheet events onto it.
//
// - Registration and timer start upsert a full row.
// - Later events patch the existing row; deletion removes it.
// - `last_event_id` is "stream_id:version" of the last event applied to the row.

use crate::modules::time_entries::core::events::TimeEntryEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_running: bool,
    pub is_billable: bool,
    pub is_manual: bool,
    pub external_sync_id: Option<String>,
    pub synced_externally: bool,
    pub is_validated: bool,
    pub validated_by: Option<String>,
    pub validated_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryView {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub duration: Option<i64>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_running: bool,
    pub is_billable: bool,
    pub is_manual: bool,
    pub external_sync_id: Option<String>,
    pub synced_externally: bool,
    pub is_validated: bool,
    pub validated_by: Option<String>,
    pub validated_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

impl From<TimeEntryRow> for TimeEntryView {
    fn from(row: TimeEntryRow) -> Self {
        let updated_at = (row.updated_at != row.created_at).then_some(row.updated_at);
        Self {
            time_entry_id: row.time_entry_id,
            user_id: row.user_id,
            task_id: row.task_id,
            project_id: row.project_id,
            start_time: row.start_time,
            end_time: row.end_time,
            duration: row.duration,
            description: row.description,
            notes: row.notes,
            is_running: row.is_running,
            is_billable: row.is_billable,
            is_manual: row.is_manual,
            external_sync_id: row.external_sync_id,
            synced_externally: row.synced_externally,
            is_validated: row.is_validated,
            validated_by: row.validated_by,
            validated_at: row.validated_at,
            created_at: row.created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeEntryPatch {
    Stopped {
        end_time: i64,
        duration: i64,
        description: Option<String>,
        notes: Option<String>,
    },
    DescriptionChanged {
        description: String,
        updated_at: i64,
    },
    Validated {
        validated_by: String,
        validated_at: i64,
    },
    Edited {
        start_time: i64,
        end_time: i64,
        duration: i64,
        description: Option<String>,
        notes: Option<String>,
        edited_at: i64,
    },
}

impl TimeEntryPatch {
    pub fn apply_to(self, row: &mut TimeEntryRow) {
        match self {
            TimeEntryPatch::Stopped {
                end_time,
                duration,
                description,
                notes,
            } => {
                row.end_time = Some(end_time);
                row.duration = Some(duration);
                row.is_running = false;
                if description.is_some() {
                    row.description = description;
                }
                if notes.is_some() {
                    row.notes = notes;
                }
                row.updated_at = end_time;
            }
            TimeEntryPatch::DescriptionChanged {
                description,
                updated_at,
            } => {
                row.description = Some(description);
                row.updated_at = updated_at;
            }
            TimeEntryPatch::Validated {
                validated_by,
                validated_at,
            } => {
                row.is_validated = true;
                row.validated_by = Some(validated_by);
                row.validated_at = Some(validated_at);
                row.updated_at = validated_at;
            }
            TimeEntryPatch::Edited {
                start_time,
                end_time,
                duration,
                description,
                notes,
                edited_at,
            } => {
                row.start_time = start_time;
                row.end_time = Some(end_time);
                row.duration = Some(duration);
                if description.is_some() {
                    row.description = description;
                }
                if notes.is_some() {
                    row.notes = notes;
                }
                row.updated_at = edited_at;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    Patch {
        user_id: String,
        time_entry_id: String,
        patch: TimeEntryPatch,
        last_event_id: String,
    },
    Remove {
        user_id: String,
        time_entry_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeEntryEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeEntryEvent::TimerStartedV1(e) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: e.time_entry_id.clone(),
            user_id: e.user_id.clone(),
            task_id: e.task_id.clone(),
            project_id: e.project_id.clone(),
            start_time: e.started_at,
            end_time: None,
            duration: None,
            description: e.description.clone(),
            notes: None,
            is_running: true,
            is_billable: e.is_billable,
            is_manual: false,
            external_sync_id: None,
            synced_externally: false,
            is_validated: false,
            validated_by: None,
            validated_at: None,
            created_at: e.started_at,
            updated_at: e.started_at,
            last_event_id: Some(stream_key),
        })],
        TimeEntryEvent::TimeEntryRegisteredV1(e) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: e.time_entry_id.clone(),
            user_id: e.user_id.clone(),
            task_id: e.task_id.clone(),
            project_id: e.project_id.clone(),
            start_time: e.start_time,
            end_time: Some(e.end_time),
            duration: Some(e.duration),
            description: e.description.clone(),
            notes: e.notes.clone(),
            is_running: false,
            is_billable: e.is_billable,
            is_manual: true,
            external_sync_id: None,
            synced_externally: false,
            is_validated: false,
            validated_by: None,
            validated_at: None,
            created_at: e.created_at,
            updated_at: e.created_at,
            last_event_id: Some(stream_key),
        })],
        TimeEntryEvent::TimerStoppedV1(e) => vec![Mutation::Patch {
            user_id: e.user_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            patch: TimeEntryPatch::Stopped {
                end_time: e.stopped_at,
                duration: e.duration,
                description: e.description.clone(),
                notes: e.notes.clone(),
            },
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimerDescriptionUpdatedV1(e) => vec![Mutation::Patch {
            user_id: e.user_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            patch: TimeEntryPatch::DescriptionChanged {
                description: e.description.clone(),
                updated_at: e.updated_at,
            },
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimeEntryValidatedV1(e) => vec![Mutation::Patch {
            user_id: e.user_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            patch: TimeEntryPatch::Validated {
                validated_by: e.validated_by.clone(),
                validated_at: e.validated_at,
            },
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimeEntryEditedV1(e) => vec![Mutation::Patch {
            user_id: e.user_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
            patch: TimeEntryPatch::Edited {
                start_time: e.start_time,
                end_time: e.end_time,
                duration: e.duration,
                description: e.description.clone(),
                notes: e.notes.clone(),
                edited_at: e.edited_at,
            },
            last_event_id: stream_key,
        }],
        TimeEntryEvent::TimeEntryDeletedV1(e) => vec![Mutation::Remove {
            user_id: e.user_id.clone(),
            time_entry_id: e.time_entry_id.clone(),
        }],
    }
}
