// Start a timer on a task the caller owns. Switching tasks takes the same path: the decider
// closes whatever is running before the new entry starts.

use crate::modules::tasks::core::ports::{TaskRepository, owned_task};
use crate::modules::tasks::core::task::TaskStatus;
use crate::modules::time_entries::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_entries::application::errors::ApplicationError;
use crate::modules::time_entries::application::handler::{Committed, TimeSheetHandler};
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::start_timer::command::StartTimer;
use crate::modules::time_entries::use_cases::start_timer::decide::decide_start;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use uuid::Uuid;

pub struct StartTimerHandler<TEventStore, TOutbox, TProjections>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TProjections: TimeEntryProjectionRepository + WatermarkRepository + 'static,
{
    time_sheets: Arc<TimeSheetHandler<TEventStore, TOutbox, TProjections>>,
    tasks: Arc<dyn TaskRepository>,
}

impl<TEventStore, TOutbox, TProjections> StartTimerHandler<TEventStore, TOutbox, TProjections>
where
    TEventStore: EventStore<TimeEntryEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
    TProjections: TimeEntryProjectionRepository + WatermarkRepository + 'static,
{
    pub fn new(
        time_sheets: Arc<TimeSheetHandler<TEventStore, TOutbox, TProjections>>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self { time_sheets, tasks }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        task_id: &str,
        description: Option<String>,
        started_at: i64,
    ) -> Result<Committed, ApplicationError> {
        let mut task = owned_task(&*self.tasks, task_id, user_id).await?;
        let command = StartTimer {
            time_entry_id: Uuid::now_v7().to_string(),
            user_id: user_id.to_string(),
            task_id: task.task_id.clone(),
            project_id: task.project_id.clone(),
            description: description.filter(|d| !d.is_empty()),
            is_billable: task.is_billable,
            started_at,
        };
        let committed = self
            .time_sheets
            .handle(user_id, |state| decide_start(state, command))
            .await?;

        if task.status == TaskStatus::Todo {
            task.status = TaskStatus::InProgress;
            task.updated_at = started_at;
            if let Err(error) = self.tasks.save(task).await {
                tracing::warn!(%error, %task_id, "timer started but the task stayed todo");
            }
        }
        tracing::info!(
            %user_id,
            %task_id,
            time_entry_id = committed.touched_entry_id().unwrap_or_default(),
            "timer started"
        );
        Ok(committed)
    }
}
