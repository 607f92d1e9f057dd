// Time sheet command handler orchestrates every write flow.
//
// - Load the user's time sheet stream and fold it into state.
// - Run the pure decision.
// - Append new events with optimistic concurrency on the loaded version.
// - Enqueue intents into the domain outbox.
// - Project the new events inline so reads see them immediately.
//
// One command per stream runs at a time, from load to projection, so the read model sees a
// stream's events in version order.

use crate::modules::time_entries::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::core::decision::Decision;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::evolve::evolve;
use crate::modules::time_entries::core::state::TimeSheetState;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub fn time_sheet_stream_id(user_id: &str) -> String {
    format!("TimeSheet-{user_id}")
}

/// Outcome of an accepted command: the new events and the state after applying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub events: Vec<TimeEntryEvent>,
    pub state: TimeSheetState,
}

impl Committed {
    /// The entry the command acted on: the last event's entry, or the running one when the
    /// command produced no events.
    pub fn touched_entry_id(&self) -> Option<&str> {
        self.events
            .last()
            .map(TimeEntryEvent::time_entry_id)
            .or_else(|| self.state.running.as_ref().map(|r| r.time_entry_id.as_str()))
    }
}

pub struct TimeSheetHandler<TEventStore, TOutbox, TProjections>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TProjections: TimeEntryProjectionRepository + WatermarkRepository + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    projector: Arc<Projector<TProjections, TProjections>>,
    streams: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<TEventStore, TOutbox, TProjections> TimeSheetHandler<TEventStore, TOutbox, TProjections>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TProjections: TimeEntryProjectionRepository + WatermarkRepository + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        projector: Arc<Projector<TProjections, TProjections>>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            projector,
            streams: Mutex::new(HashMap::new()),
        }
    }

    pub async fn current_state(&self, user_id: &str) -> Result<TimeSheetState, ApplicationError> {
        let stream = self
            .event_store
            .load(&time_sheet_stream_id(user_id))
            .await?;
        Ok(stream
            .events
            .into_iter()
            .fold(TimeSheetState::default(), evolve))
    }

    async fn stream_lock(&self, stream_id: &str) -> Arc<Mutex<()>> {
        self.streams
            .lock()
            .await
            .entry(stream_id.to_string())
            .or_default()
            .clone()
    }

    pub async fn handle<F>(&self, user_id: &str, decide: F) -> Result<Committed, ApplicationError>
    where
        F: FnOnce(&TimeSheetState) -> Decision,
    {
        let stream_id = time_sheet_stream_id(user_id);
        let lock = self.stream_lock(&stream_id).await;
        let _serialized = lock.lock().await;

        let stream = self.event_store.load(&stream_id).await?;
        let state = stream
            .events
            .into_iter()
            .fold(TimeSheetState::default(), evolve);

        let (events, intents) = match decide(&state) {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => {
                tracing::debug!(%stream_id, %reason, "command rejected");
                return Err(ApplicationError::Domain(reason));
            }
        };
        if events.is_empty() {
            return Ok(Committed { events, state });
        }

        self.event_store
            .append(&stream_id, stream.version, &events)
            .await?;
        dispatch_intents(
            &*self.outbox,
            &stream_id,
            stream.version,
            &self.topic,
            &events,
            intents,
        )
        .await?;

        for (i, event) in events.iter().enumerate() {
            self.projector
                .apply_one(&stream_id, stream.version + i as i64 + 1, event)
                .await
                .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;
        }
        tracing::debug!(%stream_id, appended = events.len(), "time sheet updated");

        let state = events.iter().cloned().fold(state, evolve);
        Ok(Committed { events, state })
    }
}
