// The backend calls the timer hook depends on. The HTTP adapter lives in `http`; tests swap in
// fakes.

use crate::client::errors::ClientError;
use async_trait::async_trait;

pub use crate::modules::time_entries::use_cases::list_time_entries_by_user::projection::TimeEntryView;
pub use crate::modules::time_entries::use_cases::timer_stats::stats::TimerStatsView;
pub use crate::modules::time_entries::use_cases::timer_status::status::TimerStatusView;

#[async_trait]
pub trait TimerApi: Send + Sync {
    async fn status(&self) -> Result<TimerStatusView, ClientError>;

    async fn start(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<TimeEntryView, ClientError>;

    /// The response body is not needed by the client.
    async fn pause(&self) -> Result<(), ClientError>;

    async fn stop(
        &self,
        description: Option<&str>,
        notes: Option<&str>,
    ) -> Result<TimeEntryView, ClientError>;

    async fn update(&self, description: Option<&str>) -> Result<TimeEntryView, ClientError>;

    async fn switch(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<TimeEntryView, ClientError>;

    async fn stats(&self) -> Result<TimerStatsView, ClientError>;
}
