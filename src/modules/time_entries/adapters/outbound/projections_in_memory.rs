// In memory projection repository, watermark repository and query side.
//
// - Rows are keyed by (user_id, time_entry_id).
// - The watermark tracks the last processed event per projector.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::{
    TaskTime, TimeEntryQueries,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<(String, String), TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("{what} repository offline"));
        }
        Ok(())
    }

    async fn rows_of(&self, user_id: &str) -> Vec<TimeEntryRow> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|((uid, _), _)| uid == user_id)
            .map(|(_, row)| row.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn find(
        &self,
        user_id: &str,
        time_entry_id: &str,
    ) -> anyhow::Result<Option<TimeEntryRow>> {
        self.ensure_online("Projections")?;
        let key = (user_id.to_string(), time_entry_id.to_string());
        Ok(self.rows.read().await.get(&key).cloned())
    }

    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let mut guard = self.rows.write().await;
        guard.insert((row.user_id.clone(), row.time_entry_id.clone()), row);
        Ok(())
    }

    async fn remove(&self, user_id: &str, time_entry_id: &str) -> anyhow::Result<()> {
        self.ensure_online("Projections")?;
        let key = (user_id.to_string(), time_entry_id.to_string());
        self.rows.write().await.remove(&key);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
        sort_by_start_time_desc: bool,
    ) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online("Projections")?;
        let mut items = self.rows_of(user_id).await;
        items.sort_by(|a, b| {
            a.start_time
                .cmp(&b.start_time)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        if sort_by_start_time_desc {
            items.reverse();
        }

        Ok(items
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(TimeEntryView::from)
            .collect())
    }

    async fn get_by_id(
        &self,
        user_id: &str,
        time_entry_id: &str,
    ) -> anyhow::Result<Option<TimeEntryView>> {
        Ok(self
            .find(user_id, time_entry_id)
            .await?
            .map(TimeEntryView::from))
    }

    async fn total_duration(&self, user_id: &str, from: i64, until: i64) -> anyhow::Result<i64> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows_of(user_id)
            .await
            .iter()
            .filter(|r| from <= r.start_time && r.start_time < until)
            .filter_map(|r| r.duration)
            .sum())
    }

    async fn time_by_task(&self, user_id: &str) -> anyhow::Result<HashMap<String, TaskTime>> {
        self.ensure_online("Projections")?;
        let mut totals: HashMap<String, TaskTime> = HashMap::new();
        for row in self.rows_of(user_id).await {
            let entry = totals.entry(row.task_id.clone()).or_default();
            entry.entries_count += 1;
            entry.total_time += row.duration.unwrap_or(0);
            entry.is_running |= row.is_running;
        }
        Ok(totals)
    }

    async fn owner_of(&self, time_entry_id: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Projections")?;
        Ok(self
            .rows
            .read()
            .await
            .keys()
            .find(|(_, id)| id == time_entry_id)
            .map(|(user_id, _)| user_id.clone()))
    }
}

#[cfg(test)]
pub mod time_entry_in_memory_projections_tests {
    use super::*;
    use crate::tests::fixtures::rows::make_time_entry_row;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_add_the_time_entry_row_to_the_repository() {
        let repository = InMemoryProjections::new();
        let row = make_time_entry_row("te-1", 1_700_000_000_000, Some(60));
        repository.upsert(row.clone()).await.expect("upsert failed");
        assert_eq!(
            repository.find(&row.user_id, "te-1").await.unwrap(),
            Some(row)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_sorted_and_paginated() {
        let repository = InMemoryProjections::new();
        for (id, start) in [("te-1", 1_000), ("te-2", 3_000), ("te-3", 2_000)] {
            repository
                .upsert(make_time_entry_row(id, start, Some(1)))
                .await
                .unwrap();
        }

        let desc = repository
            .list_by_user_id("user-fixed-0001", 0, 10, true)
            .await
            .unwrap();
        let ids: Vec<_> = desc.iter().map(|v| v.time_entry_id.as_str()).collect();
        assert_eq!(ids, vec!["te-2", "te-3", "te-1"]);

        let page = repository
            .list_by_user_id("user-fixed-0001", 1, 1, false)
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].time_entry_id, "te-3");

        let past_end = repository
            .list_by_user_id("user-fixed-0001", 5, 10, false)
            .await
            .unwrap();
        assert!(past_end.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_sum_closed_durations_inside_the_window() {
        let repository = InMemoryProjections::new();
        repository
            .upsert(make_time_entry_row("te-1", 1_000, Some(60)))
            .await
            .unwrap();
        repository
            .upsert(make_time_entry_row("te-2", 2_000, Some(30)))
            .await
            .unwrap();
        repository
            .upsert(make_time_entry_row("te-3", 2_500, None))
            .await
            .unwrap();
        repository
            .upsert(make_time_entry_row("te-4", 9_000, Some(600)))
            .await
            .unwrap();

        let total = repository
            .total_duration("user-fixed-0001", 1_000, 9_000)
            .await
            .unwrap();
        assert_eq!(total, 90);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_aggregate_time_by_task() {
        let repository = InMemoryProjections::new();
        repository
            .upsert(make_time_entry_row("te-1", 1_000, Some(60)))
            .await
            .unwrap();
        let mut running = make_time_entry_row("te-2", 2_000, None);
        running.is_running = true;
        repository.upsert(running).await.unwrap();

        let totals = repository.time_by_task("user-fixed-0001").await.unwrap();
        assert_eq!(
            totals.get("task-fixed-0001"),
            Some(&TaskTime {
                total_time: 60,
                entries_count: 2,
                is_running: true
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_projections_repository_is_offline() {
        let mut repository = InMemoryProjections::new();
        repository.toggle_offline();
        let result = repository
            .upsert(make_time_entry_row("te-1", 1_000, None))
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Projections repository offline")
        );
        let result = repository.set("time_entry_rows", "s:1").await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Watermark repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_find_the_owner_of_an_entry() {
        let repository = InMemoryProjections::new();
        repository
            .upsert(make_time_entry_row("te-1", 1_000, Some(60)))
            .await
            .unwrap();
        assert_eq!(
            repository.owner_of("te-1").await.unwrap().as_deref(),
            Some("user-fixed-0001")
        );
        assert_eq!(repository.owner_of("te-404").await.unwrap(), None);
    }
}
