use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryRow;

/// A closed (or, with `duration: None`, unfinished) row owned by the fixed user and task.
pub fn make_time_entry_row(time_entry_id: &str, start_time: i64, duration: Option<i64>) -> TimeEntryRow {
    TimeEntryRow {
        time_entry_id: time_entry_id.to_string(),
        user_id: "user-fixed-0001".to_string(),
        task_id: "task-fixed-0001".to_string(),
        project_id: None,
        start_time,
        end_time: duration.map(|d| start_time + d * 1_000),
        duration,
        description: Some("Fixture entry".to_string()),
        notes: None,
        is_running: false,
        is_billable: true,
        is_manual: false,
        external_sync_id: None,
        synced_externally: false,
        is_validated: false,
        validated_by: None,
        validated_at: None,
        created_at: start_time,
        updated_at: start_time,
        last_event_id: None,
    }
}
