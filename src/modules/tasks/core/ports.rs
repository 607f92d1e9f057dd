// Ports the task catalogue needs from storage, plus the ownership check shared by every
// use case that books time against a task.

use crate::modules::tasks::core::task::Task;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskAccessError {
    #[error("Task not found")]
    NotFound,

    #[error("Not authorized to track time for this task")]
    Forbidden,

    #[error("task storage failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn get(&self, task_id: &str) -> anyhow::Result<Option<Task>>;
    async fn save(&self, task: Task) -> anyhow::Result<()>;
    async fn list_by_user(&self, user_id: &str, include_inactive: bool)
    -> anyhow::Result<Vec<Task>>;
}

pub async fn owned_task(
    repository: &dyn TaskRepository,
    task_id: &str,
    user_id: &str,
) -> Result<Task, TaskAccessError> {
    let task = repository
        .get(task_id)
        .await
        .map_err(|e| TaskAccessError::Backend(e.to_string()))?
        .ok_or(TaskAccessError::NotFound)?;
    if !task.is_owned_by(user_id) {
        return Err(TaskAccessError::Forbidden);
    }
    Ok(task)
}
