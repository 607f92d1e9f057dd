// TimeSheetState is the fold of one user's time sheet stream.
//
// - `running` holds the at most one entry currently accumulating time.
// - `closed` remembers every finished entry, its interval and whether it was validated.
// - Deleted entries leave both.
// - No input or output here.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningEntry {
    pub time_entry_id: String,
    pub task_id: String,
    pub project_id: Option<String>,
    pub description: Option<String>,
    pub is_billable: bool,
    pub started_at: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClosedEntry {
    pub start_time: i64,
    pub end_time: i64,
    pub is_validated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeSheetState {
    pub running: Option<RunningEntry>,
    pub closed: BTreeMap<String, ClosedEntry>,
}

impl TimeSheetState {
    pub fn knows(&self, time_entry_id: &str) -> bool {
        self.closed.contains_key(time_entry_id)
            || self
                .running
                .as_ref()
                .is_some_and(|r| r.time_entry_id == time_entry_id)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

#[cfg(test)]
mod time_sheet_state_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_create_the_blank_state() {
        let state = TimeSheetState::default();
        assert!(!state.is_running());
        assert!(state.closed.is_empty());
        assert!(!state.knows("te-fixed-0001"));
    }

    #[rstest]
    fn it_should_know_running_and_closed_entries() {
        let mut state = TimeSheetState::default();
        state.closed.insert("te-closed".into(), ClosedEntry::default());
        state.running = Some(RunningEntry {
            time_entry_id: "te-running".into(),
            task_id: "task-1".into(),
            project_id: None,
            description: None,
            is_billable: true,
            started_at: 1_700_000_000_000,
        });
        assert!(state.knows("te-closed"));
        assert!(state.knows("te-running"));
        assert!(!state.knows("te-other"));
    }
}
