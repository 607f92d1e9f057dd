// Command data type for entering a closed time entry by hand.
//
// Independent of the transport: the HTTP inbound builds it after the task check.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_billable: bool,
    pub created_at: i64,
}
