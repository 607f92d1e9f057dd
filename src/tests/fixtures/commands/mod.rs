// Builders for time sheet commands.

use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::start_timer::command::StartTimer;
use serde::Deserialize;

pub const FIXED_CREATED_AT: i64 = 1_700_000_000_000;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterTimeEntryDto {
    pub time_entry_id: String,
    pub user_id: String,
    pub task_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub is_billable: bool,
}

pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        let dto: RegisterTimeEntryDto =
            serde_json::from_str(include_str!("json/register_time_entry.json")).unwrap();
        Self {
            inner: RegisterTimeEntry {
                time_entry_id: dto.time_entry_id,
                user_id: dto.user_id,
                task_id: dto.task_id,
                project_id: None,
                start_time: dto.start_time,
                end_time: dto.end_time,
                description: dto.description,
                notes: dto.notes,
                is_billable: dto.is_billable,
                created_at: FIXED_CREATED_AT,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: i64) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

pub struct StartTimerBuilder {
    inner: StartTimer,
}

impl Default for StartTimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartTimerBuilder {
    pub fn new() -> Self {
        Self {
            inner: StartTimer {
                time_entry_id: "te-fixed-0001".to_string(),
                user_id: "user-fixed-0001".to_string(),
                task_id: "task-fixed-0001".to_string(),
                project_id: None,
                description: Some("Writing tests".to_string()),
                is_billable: true,
                started_at: FIXED_CREATED_AT,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn started_at(mut self, v: i64) -> Self {
        self.inner.started_at = v;
        self
    }

    pub fn build(self) -> StartTimer {
        self.inner
    }
}

#[cfg(test)]
mod command_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterTimeEntryBuilder::default().build();
        assert_eq!(built.time_entry_id, "te-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.end_time - built.start_time, 360_000);
        assert_eq!(built.description.as_deref(), Some("This is a test"));
        assert_eq!(built.created_at, FIXED_CREATED_AT);
    }

    #[rstest]
    fn setters_override_fields() {
        let custom = StartTimerBuilder::new()
            .time_entry_id("tid-123")
            .task_id("task-456")
            .started_at(1111)
            .build();
        assert_eq!(custom.time_entry_id, "tid-123");
        assert_eq!(custom.task_id, "task-456");
        assert_eq!(custom.started_at, 1111);
    }
}
