use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use async_trait::async_trait;
use std::collections::HashMap;

/// Time booked on one task, in whole seconds of closed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskTime {
    pub total_time: i64,
    pub entries_count: u64,
    pub is_running: bool,
}

#[async_trait]
pub trait TimeEntryQueries {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>>;

    async fn get_by_id(
        &self,
        user_id: &str,
        time_entry_id: &str,
    ) -> anyhow::Result<Option<TimeEntryView>>;

    /// Sum of closed entry durations whose start lies in `[from, until)`.
    async fn total_duration(&self, user_id: &str, from: i64, until: i64) -> anyhow::Result<i64>;

    async fn time_by_task(&self, user_id: &str) -> anyhow::Result<HashMap<String, TaskTime>>;

    /// The user an entry belongs to, whoever is asking.
    async fn owner_of(&self, time_entry_id: &str) -> anyhow::Result<Option<String>>;
}
