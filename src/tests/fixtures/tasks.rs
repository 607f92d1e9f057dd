use crate::modules::tasks::core::task::{DEFAULT_TASK_COLOR, Task, TaskPriority, TaskStatus};
use crate::modules::tasks::use_cases::create_task::command::CreateTask;

pub fn make_task(task_id: &str, user_id: &str) -> Task {
    Task {
        task_id: task_id.to_string(),
        user_id: user_id.to_string(),
        title: format!("Task {task_id}"),
        description: None,
        parent_task_id: None,
        project_id: Some("project-fixed-0001".to_string()),
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        estimated_minutes: Some(60),
        tags: vec!["Work".to_string()],
        color: DEFAULT_TASK_COLOR.to_string(),
        due_date: None,
        is_active: true,
        is_billable: true,
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
        completed_at: None,
    }
}

pub struct CreateTaskBuilder {
    inner: CreateTask,
}

impl Default for CreateTaskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateTaskBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateTask {
                task_id: "task-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                title: "Write report".to_string(),
                description: None,
                parent_task_id: None,
                project_id: None,
                priority: TaskPriority::Medium,
                estimated_minutes: None,
                tags: vec![],
                color: None,
                due_date: None,
                is_billable: true,
                created_at: 1_700_000_000_000,
            },
        }
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn parent(mut self, v: impl Into<String>) -> Self {
        self.inner.parent_task_id = Some(v.into());
        self
    }

    pub fn build(self) -> CreateTask {
        self.inner
    }
}
