use crate::modules::tasks::core::task::TaskStatus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTaskStatus {
    pub task_id: String,
    pub user_id: String,
    pub status: TaskStatus,
    pub changed_at: i64,
}
