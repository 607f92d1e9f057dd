// In memory task catalogue keyed by task id.

use crate::modules::tasks::core::ports::TaskRepository;
use crate::modules::tasks::core::task::Task;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTasks {
    tasks: RwLock<HashMap<String, Task>>,
    is_offline: bool,
}

impl InMemoryTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Task repository offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TaskRepository for InMemoryTasks {
    async fn get(&self, task_id: &str) -> anyhow::Result<Option<Task>> {
        self.ensure_online()?;
        Ok(self.tasks.read().await.get(task_id).cloned())
    }

    async fn save(&self, task: Task) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.tasks.write().await.insert(task.task_id.clone(), task);
        Ok(())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        include_inactive: bool,
    ) -> anyhow::Result<Vec<Task>> {
        self.ensure_online()?;
        let guard = self.tasks.read().await;
        let mut tasks: Vec<Task> = guard
            .values()
            .filter(|t| t.user_id == user_id && (include_inactive || t.is_active))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.task_id.cmp(&b.task_id))
        });
        Ok(tasks)
    }
}
