// Projector: translate committed events into read model mutations, persist them, and advance
// the watermark.

use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::{
    Mutation, apply,
};
use std::sync::Arc;

pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: TimeEntryProjectionRepository,
    TWatermarkRepository: WatermarkRepository,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark_repository: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository,
        }
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeEntryEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch {
                    user_id,
                    time_entry_id,
                    patch,
                    last_event_id,
                } => {
                    let mut row = self
                        .repository
                        .find(&user_id, &time_entry_id)
                        .await?
                        .ok_or_else(|| {
                            anyhow::anyhow!("time entry row {time_entry_id} is missing")
                        })?;
                    patch.apply_to(&mut row);
                    row.last_event_id = Some(last_event_id);
                    self.repository.upsert(row).await?;
                }
                Mutation::Remove {
                    user_id,
                    time_entry_id,
                } => self.repository.remove(&user_id, &time_entry_id).await?,
            }
        }
        self.watermark_repository
            .set(&self.name, &format!("{stream_id}:{version}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod time_entry_projector_tests {
    use super::*;
    use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
    use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
    use crate::tests::fixtures::events::{
        make_time_entry_deleted_v1_event, make_timer_started_v1_event,
        make_timer_stopped_v1_event,
    };
    use rstest::rstest;

    const STREAM: &str = "TimeSheet-user-fixed-0001";

    #[rstest]
    #[tokio::test]
    async fn it_should_apply_mutations_and_advance_the_watermark() {
        let store = Arc::new(InMemoryProjections::new());
        let projector = Projector::new("time_entry_rows", store.clone(), store.clone());
        projector
            .apply_one(
                STREAM,
                1,
                &TimeEntryEvent::TimerStartedV1(make_timer_started_v1_event()),
            )
            .await
            .expect("start projection failed");
        projector
            .apply_one(
                STREAM,
                2,
                &TimeEntryEvent::TimerStoppedV1(make_timer_stopped_v1_event()),
            )
            .await
            .expect("stop projection failed");

        assert_eq!(
            store.get("time_entry_rows").await.unwrap(),
            Some(format!("{STREAM}:2"))
        );
        let view = store
            .get_by_id("user-fixed-0001", "te-fixed-0001")
            .await
            .unwrap()
            .expect("expected the projected row");
        assert!(!view.is_running);
        assert_eq!(view.duration, Some(make_timer_stopped_v1_event().duration));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_patch_a_missing_row() {
        let store = Arc::new(InMemoryProjections::new());
        let projector = Projector::new("time_entry_rows", store.clone(), store);
        let result = projector
            .apply_one(
                STREAM,
                1,
                &TimeEntryEvent::TimerStoppedV1(make_timer_stopped_v1_event()),
            )
            .await;
        assert!(result.unwrap_err().to_string().contains("is missing"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_repository_is_offline() {
        let mut store = InMemoryProjections::new();
        store.toggle_offline();
        let store = Arc::new(store);
        let projector = Projector::new("time_entry_rows", store.clone(), store);
        let result = projector
            .apply_one(
                STREAM,
                1,
                &TimeEntryEvent::TimerStartedV1(make_timer_started_v1_event()),
            )
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Projections repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_if_the_watermark_repository_is_offline() {
        let store = Arc::new(InMemoryProjections::new());
        let mut watermark = InMemoryProjections::new();
        watermark.toggle_offline();
        let projector = Projector::new("time_entry_rows", store, Arc::new(watermark));
        let result = projector
            .apply_one(
                STREAM,
                1,
                &TimeEntryEvent::TimerStartedV1(make_timer_started_v1_event()),
            )
            .await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Watermark repository offline")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_drop_the_row_of_a_deleted_entry() {
        let store = Arc::new(InMemoryProjections::new());
        let projector = Projector::new("time_entry_rows", store.clone(), store.clone());
        let started = make_timer_started_v1_event();
        projector
            .apply_one(STREAM, 1, &TimeEntryEvent::TimerStartedV1(started.clone()))
            .await
            .unwrap();
        projector
            .apply_one(
                STREAM,
                2,
                &TimeEntryEvent::TimeEntryDeletedV1(make_time_entry_deleted_v1_event(
                    &started.time_entry_id,
                )),
            )
            .await
            .unwrap();

        assert_eq!(
            store
                .get_by_id("user-fixed-0001", &started.time_entry_id)
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            store.get("time_entry_rows").await.unwrap(),
            Some(format!("{STREAM}:2"))
        );
    }
}
