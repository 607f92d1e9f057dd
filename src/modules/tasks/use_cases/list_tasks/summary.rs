// Task plus the time booked against it.

use crate::modules::tasks::core::task::Task;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TaskTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummaryView {
    #[serde(flatten)]
    pub task: Task,
    pub total_time: i64,
    pub entries_count: u64,
    pub is_running: bool,
}

pub fn summarize(tasks: Vec<Task>, times: &HashMap<String, TaskTime>) -> Vec<TaskSummaryView> {
    tasks
        .into_iter()
        .map(|task| {
            let time = times.get(&task.task_id).copied().unwrap_or_default();
            TaskSummaryView {
                task,
                total_time: time.total_time,
                entries_count: time.entries_count,
                is_running: time.is_running,
            }
        })
        .collect()
}
