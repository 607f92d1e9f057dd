use crate::modules::tasks::core::task::TaskPriority;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTask {
    pub task_id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub parent_task_id: Option<String>,
    pub project_id: Option<String>,
    pub priority: TaskPriority,
    pub estimated_minutes: Option<i64>,
    pub tags: Vec<String>,
    pub color: Option<String>,
    pub due_date: Option<i64>,
    pub is_billable: bool,
    pub created_at: i64,
}
