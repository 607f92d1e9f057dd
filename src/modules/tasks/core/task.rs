// Task: the unit of trackable work a time entry is booked against.
//
// - A task may reference a parent task. Only one level of nesting is allowed.
// - Archiving is a soft delete: the task stays readable but is no longer active.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TASK_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub parent_task_id: Option<String>,
    pub project_id: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub estimated_minutes: Option<i64>,
    pub tags: Vec<String>,
    pub color: String,
    pub due_date: Option<i64>,
    pub is_active: bool,
    pub is_billable: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
}

impl Task {
    pub fn is_sub_task(&self) -> bool {
        self.parent_task_id.is_some()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
