use crate::modules::tasks::core::ports::TaskRepository;
use crate::modules::tasks::core::task::Task;
use crate::modules::tasks::use_cases::create_task::command::CreateTask;
use crate::modules::tasks::use_cases::create_task::decide::{CreateTaskError, decide_create};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CreateTaskHandlerError {
    #[error(transparent)]
    Domain(#[from] CreateTaskError),

    #[error("task storage failed: {0}")]
    Backend(#[from] anyhow::Error),
}

pub struct CreateTaskHandler {
    repository: Arc<dyn TaskRepository>,
}

impl CreateTaskHandler {
    pub fn new(repository: Arc<dyn TaskRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: CreateTask) -> Result<Task, CreateTaskHandlerError> {
        let parent = match &command.parent_task_id {
            Some(parent_id) => self.repository.get(parent_id).await?,
            None => None,
        };
        let task = decide_create(parent.as_ref(), command)?;
        self.repository.save(task.clone()).await?;
        tracing::info!(task_id = %task.task_id, user_id = %task.user_id, "task created");
        Ok(task)
    }
}
