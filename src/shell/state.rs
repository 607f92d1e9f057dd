use crate::modules::tasks::adapters::outbound::tasks_in_memory::InMemoryTasks;
use crate::modules::tasks::core::ports::TaskRepository;
use crate::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_entries::application::handler::TimeSheetHandler;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::handler::Projector;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
use crate::modules::time_entries::use_cases::list_time_entries_by_user::queries_port::TimeEntryQueries;
use crate::modules::time_entries::use_cases::start_timer::handler::StartTimerHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::auth::SessionResolver;
use crate::shell::errors::ApiError;
use std::sync::Arc;

pub const TIME_ENTRIES_TOPIC: &str = "time-entries.v1";

pub type InMemoryTimeSheets =
    TimeSheetHandler<InMemoryEventStore<TimeEntryEvent>, InMemoryDomainOutbox, InMemoryProjections>;

#[derive(Clone)]
pub struct AppState {
    pub project_name: String,
    pub time_sheets: Arc<InMemoryTimeSheets>,
    pub start_handler: Arc<
        StartTimerHandler<InMemoryEventStore<TimeEntryEvent>, InMemoryDomainOutbox, InMemoryProjections>,
    >,
    pub queries: Arc<dyn TimeEntryQueries + Send + Sync>,
    pub tasks: Arc<dyn TaskRepository>,
    pub sessions: Arc<dyn SessionResolver>,
    pub outbox: Arc<InMemoryDomainOutbox>,
}

impl AppState {
    /// Wire every port to its in-memory adapter.
    pub fn in_memory(project_name: impl Into<String>, sessions: Arc<dyn SessionResolver>) -> Self {
        let event_store = Arc::new(InMemoryEventStore::<TimeEntryEvent>::new());
        let outbox = Arc::new(InMemoryDomainOutbox::new());
        let projections = Arc::new(InMemoryProjections::new());
        let tasks: Arc<dyn TaskRepository> = Arc::new(InMemoryTasks::new());

        let projector = Arc::new(Projector::new(
            "time_entry_rows",
            projections.clone(),
            projections.clone(),
        ));
        let time_sheets = Arc::new(TimeSheetHandler::new(
            TIME_ENTRIES_TOPIC,
            event_store,
            outbox.clone(),
            projector,
        ));
        let start_handler = Arc::new(StartTimerHandler::new(time_sheets.clone(), tasks.clone()));

        Self {
            project_name: project_name.into(),
            time_sheets,
            start_handler,
            queries: projections,
            tasks,
            sessions,
            outbox,
        }
    }

    /// Read back the entry a command touched, as clients see it.
    pub async fn entry_view(
        &self,
        user_id: &str,
        time_entry_id: Option<&str>,
    ) -> Result<TimeEntryView, ApiError> {
        let Some(time_entry_id) = time_entry_id else {
            return Err(ApiError::NotFound("Time entry not found".into()));
        };
        self.queries
            .get_by_id(user_id, time_entry_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Time entry not found".into()))
    }

    /// 403 when the entry exists under another user. Unknown entries fall through to the
    /// time sheet, which answers 404.
    pub async fn ensure_entry_owner(
        &self,
        user_id: &str,
        time_entry_id: &str,
        action: &str,
    ) -> Result<(), ApiError> {
        match self.queries.owner_of(time_entry_id).await? {
            Some(owner) if owner != user_id => Err(ApiError::Forbidden(format!(
                "Not authorized to {action} this entry"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::modules::tasks::core::task::Task;
    use crate::shell::auth::InMemorySessions;
    use crate::tests::fixtures::tasks::make_task;
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use http_body_util::BodyExt;

    pub const TOKEN: &str = "token-fixed-0001";
    pub const USER: &str = "user-fixed-0001";
    pub const OTHER_TOKEN: &str = "token-fixed-0002";
    pub const OTHER_USER: &str = "user-fixed-0002";

    pub fn make_test_state() -> AppState {
        let sessions = InMemorySessions::default()
            .with_token(TOKEN, USER)
            .with_token(OTHER_TOKEN, OTHER_USER);
        AppState::in_memory("TimeTrack API", Arc::new(sessions))
    }

    pub async fn make_state_with_task(task_id: &str) -> (AppState, Task) {
        let state = make_test_state();
        let task = make_task(task_id, USER);
        state.tasks.save(task.clone()).await.unwrap();
        (state, task)
    }

    pub fn authorized(method: &str, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {TOKEN}"));
        match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    pub async fn json_body(response: Response<Body>) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }
}
