use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::intents::TimeEntryIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append. Each row carries
/// the stream version of the committed event it announces.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    events: &[TimeEntryEvent],
    intents: Vec<TimeEntryIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let (event_type, time_entry_id, occurred_at, payload) = match intent {
            TimeEntryIntent::PublishTimeEntryStopped { payload } => (
                "TimeEntryStopped",
                payload.time_entry_id.clone(),
                payload.stopped_at,
                serde_json::to_value(payload)?,
            ),
            TimeEntryIntent::PublishTimeEntryRegistered { payload } => (
                "TimeEntryRegistered",
                payload.time_entry_id.clone(),
                payload.created_at,
                serde_json::to_value(payload)?,
            ),
            TimeEntryIntent::PublishTimeEntryEdited { payload } => (
                "TimeEntryEdited",
                payload.time_entry_id.clone(),
                payload.edited_at,
                serde_json::to_value(payload)?,
            ),
            TimeEntryIntent::PublishTimeEntryDeleted { payload } => (
                "TimeEntryDeleted",
                payload.time_entry_id.clone(),
                payload.deleted_at,
                serde_json::to_value(payload)?,
            ),
        };
        let position = events
            .iter()
            .position(|e| announces(e, event_type, &time_entry_id))
            .unwrap_or(i);
        outbox
            .enqueue(OutboxRow {
                topic: topic.to_string(),
                event_type: event_type.to_string(),
                event_version: 1,
                stream_id: stream_id.to_string(),
                stream_version: starting_version + position as i64 + 1,
                occurred_at,
                payload,
            })
            .await?;
    }
    Ok(())
}

fn announces(event: &TimeEntryEvent, event_type: &str, time_entry_id: &str) -> bool {
    let matches_type = matches!(
        (event, event_type),
        (TimeEntryEvent::TimerStoppedV1(_), "TimeEntryStopped")
            | (TimeEntryEvent::TimeEntryRegisteredV1(_), "TimeEntryRegistered")
            | (TimeEntryEvent::TimeEntryEditedV1(_), "TimeEntryEdited")
            | (TimeEntryEvent::TimeEntryDeletedV1(_), "TimeEntryDeleted")
    );
    matches_type && event.time_entry_id() == time_entry_id
}
