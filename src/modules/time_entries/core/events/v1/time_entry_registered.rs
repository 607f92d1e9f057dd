// A closed time entry was entered by hand rather than tracked with the timer.
//
// All i64 instants are epoch milliseconds; `duration` is in whole seconds.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryRegisteredV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_billable: bool,
    pub created_at: i64,
}
