// Timer state hook.
//
// - Mirrors the server's running time entry; the server stays the source of truth.
// - Between reads, elapsed time is derived from a local reference instant and refreshed by a
//   one second ticker. The ticker never touches the network.
// - State is written only after a successful call. Failures are logged and returned.
// - Every state change is published on a watch channel.

use crate::client::api::{TimeEntryView, TimerApi, TimerStatsView};
use crate::client::errors::ClientError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimerState {
    pub is_running: bool,
    pub current_entry: Option<TimeEntryView>,
    /// Whole seconds.
    pub elapsed_time: i64,
}

/// Local stand-in for the entry's start: `anchor - offset`. Kept as a pair so a large
/// server-reported elapsed value never has to be subtracted from an `Instant`.
#[derive(Debug, Clone, Copy)]
struct Reference {
    anchor: Instant,
    offset: Duration,
}

impl Reference {
    fn starting_now(elapsed_seconds: i64) -> Self {
        Self {
            anchor: Instant::now(),
            offset: Duration::from_secs(elapsed_seconds.max(0) as u64),
        }
    }

    fn elapsed_seconds(&self) -> i64 {
        (self.offset + self.anchor.elapsed()).as_secs() as i64
    }
}

#[derive(Default)]
struct Inner {
    state: TimerState,
    reference: Option<Reference>,
    generation: u64,
    ticker: Option<CancellationToken>,
}

impl Inner {
    fn stop_ticking(&mut self) {
        self.generation += 1;
        self.reference = None;
        if let Some(token) = self.ticker.take() {
            token.cancel();
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    sender: watch::Sender<TimerState>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.sender.send_replace(inner.state.clone());
    }

    /// Replace any ticker with a fresh one counting from `reference`.
    fn start_ticking(self: &Arc<Self>, inner: &mut Inner, reference: Reference) {
        inner.stop_ticking();
        inner.reference = Some(reference);
        let token = CancellationToken::new();
        inner.ticker = Some(token.clone());
        tokio::spawn(run_ticker(
            Arc::downgrade(self),
            inner.generation,
            token,
            reference.anchor + TICK,
        ));
    }

    /// Returns false once the ticker that called it is stale.
    fn tick(&self, generation: u64) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation || !inner.state.is_running {
            return false;
        }
        let Some(reference) = inner.reference else {
            return false;
        };
        inner.state.elapsed_time = reference.elapsed_seconds();
        self.publish(&inner);
        true
    }
}

async fn run_ticker(
    shared: Weak<Shared>,
    generation: u64,
    shutdown: CancellationToken,
    first_tick: Instant,
) {
    let mut interval = interval_at(first_tick, TICK);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => return,
            _ = interval.tick() => (),
        }
        let Some(shared) = shared.upgrade() else {
            return;
        };
        if !shared.tick(generation) {
            return;
        }
    }
}

pub struct TimerHook<A: TimerApi> {
    api: A,
    shared: Arc<Shared>,
}

impl<A: TimerApi> TimerHook<A> {
    pub fn new(api: A) -> Self {
        let (sender, _) = watch::channel(TimerState::default());
        Self {
            api,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner::default()),
                sender,
            }),
        }
    }

    pub fn state(&self) -> TimerState {
        self.shared.lock().state.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TimerState> {
        self.shared.sender.subscribe()
    }

    /// Where the local clock believes the running entry started, if it is ticking.
    pub fn reference_start(&self) -> Option<Instant> {
        self.shared
            .lock()
            .reference
            .and_then(|r| r.anchor.checked_sub(r.offset))
    }

    /// Overwrite local state with the server's view.
    pub async fn fetch_timer_status(&self) -> Result<(), ClientError> {
        let status = self
            .api
            .status()
            .await
            .inspect_err(|error| tracing::error!(%error, "failed to fetch timer status"))?;

        let mut inner = self.shared.lock();
        match status.current_entry.filter(|_| status.is_running) {
            Some(entry) => {
                inner.state = TimerState {
                    is_running: true,
                    current_entry: Some(entry),
                    elapsed_time: status.elapsed_time.max(0),
                };
                self.shared
                    .start_ticking(&mut inner, Reference::starting_now(status.elapsed_time));
            }
            None => {
                inner.stop_ticking();
                inner.state = TimerState::default();
            }
        }
        self.shared.publish(&inner);
        Ok(())
    }

    pub async fn start_timer(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<(), ClientError> {
        let entry = self
            .api
            .start(task_id, description)
            .await
            .inspect_err(|error| tracing::error!(%error, %task_id, "failed to start timer"))?;
        self.run_fresh(entry);
        Ok(())
    }

    pub async fn pause_timer(&self) -> Result<(), ClientError> {
        self.api
            .pause()
            .await
            .inspect_err(|error| tracing::error!(%error, "failed to pause timer"))?;

        let mut inner = self.shared.lock();
        inner.stop_ticking();
        inner.state.is_running = false;
        self.shared.publish(&inner);
        Ok(())
    }

    pub async fn stop_timer(
        &self,
        description: Option<&str>,
        notes: Option<&str>,
    ) -> Result<(), ClientError> {
        self.api
            .stop(description, notes)
            .await
            .inspect_err(|error| tracing::error!(%error, "failed to stop timer"))?;
        self.clear();
        Ok(())
    }

    pub async fn update_timer(&self, description: Option<&str>) -> Result<(), ClientError> {
        let entry = self
            .api
            .update(description)
            .await
            .inspect_err(|error| tracing::error!(%error, "failed to update timer"))?;

        let mut inner = self.shared.lock();
        inner.state.current_entry = Some(entry);
        self.shared.publish(&inner);
        Ok(())
    }

    pub async fn switch_task(
        &self,
        task_id: &str,
        description: Option<&str>,
    ) -> Result<(), ClientError> {
        let entry = self
            .api
            .switch(task_id, description)
            .await
            .inspect_err(|error| tracing::error!(%error, %task_id, "failed to switch task"))?;
        self.run_fresh(entry);
        Ok(())
    }

    /// Local only: back to the idle baseline without telling the server.
    pub fn reset_timer(&self) {
        self.clear();
    }

    pub async fn get_timer_stats(&self) -> Result<TimerStatsView, ClientError> {
        self.api
            .stats()
            .await
            .inspect_err(|error| tracing::error!(%error, "failed to fetch timer stats"))
    }

    fn run_fresh(&self, entry: TimeEntryView) {
        let mut inner = self.shared.lock();
        inner.state = TimerState {
            is_running: true,
            current_entry: Some(entry),
            elapsed_time: 0,
        };
        self.shared
            .start_ticking(&mut inner, Reference::starting_now(0));
        self.shared.publish(&inner);
    }

    fn clear(&self) {
        let mut inner = self.shared.lock();
        inner.stop_ticking();
        inner.state = TimerState::default();
        self.shared.publish(&inner);
    }
}

impl<A: TimerApi> Drop for TimerHook<A> {
    fn drop(&mut self) {
        self.shared.lock().stop_ticking();
    }
}
