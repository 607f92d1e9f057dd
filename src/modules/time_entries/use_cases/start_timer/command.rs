// Command to start tracking time on a task.
//
// `project_id` and `is_billable` are copied from the task when the command is built, so the
// decider stays free of any task lookup.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimer {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub is_billable: bool,
    pub started_at: i64,
}
