// A timer was started: a new running time entry exists from `started_at`.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimerStartedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub is_billable: bool,
    pub started_at: i64,
}
