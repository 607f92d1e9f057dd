// Presentational timer widget: the display clock and four controls bound to the hook.
// Commands issued here log failures and swallow them.

use crate::client::api::TimerApi;
use crate::client::timer_hook::{TimerHook, TimerState};

/// `HH:MM:SS`, each field zero padded. Hours keep growing past two digits.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub stop: bool,
    pub reset: bool,
}

impl Controls {
    pub fn for_state(state: &TimerState, task_selected: bool) -> Self {
        Self {
            start: task_selected,
            pause: state.is_running,
            stop: state.is_running,
            reset: true,
        }
    }
}

pub struct TimerWidget<'a, A: TimerApi> {
    hook: &'a TimerHook<A>,
    selected_task: Option<String>,
}

impl<'a, A: TimerApi> TimerWidget<'a, A> {
    pub fn new(hook: &'a TimerHook<A>, selected_task: Option<String>) -> Self {
        Self {
            hook,
            selected_task,
        }
    }

    pub fn select_task(&mut self, task_id: Option<String>) {
        self.selected_task = task_id;
    }

    pub fn selected_task(&self) -> Option<&str> {
        self.selected_task.as_deref()
    }

    pub fn display(&self) -> String {
        format_elapsed(self.hook.state().elapsed_time)
    }

    pub fn controls(&self) -> Controls {
        Controls::for_state(&self.hook.state(), self.selected_task.is_some())
    }

    /// One line: the clock, what it is tracking, and the enabled controls.
    pub fn render(&self) -> String {
        let state = self.hook.state();
        let controls = Controls::for_state(&state, self.selected_task.is_some());
        let tracking = match (&state.current_entry, state.is_running) {
            (Some(entry), true) => format!("running on {}", entry.task_id),
            (Some(entry), false) => format!("paused on {}", entry.task_id),
            (None, _) => "idle".to_string(),
        };
        let description = state
            .current_entry
            .as_ref()
            .and_then(|entry| entry.description.as_deref())
            .map(|d| format!(" - {d}"))
            .unwrap_or_default();
        let buttons: Vec<&str> = [
            (controls.start, "start"),
            (controls.pause, "pause"),
            (controls.stop, "stop"),
            (controls.reset, "reset"),
        ]
        .into_iter()
        .filter_map(|(enabled, label)| enabled.then_some(label))
        .collect();
        format!(
            "{}  {tracking}{description}  [{}]",
            format_elapsed(state.elapsed_time),
            buttons.join("|")
        )
    }

    pub async fn on_start(&self, description: Option<&str>) {
        let Some(task_id) = self.selected_task.as_deref() else {
            tracing::debug!("start ignored, no task selected");
            return;
        };
        if let Err(error) = self.hook.start_timer(task_id, description).await {
            tracing::warn!(%error, "start from widget failed");
        }
    }

    pub async fn on_pause(&self) {
        if !self.controls().pause {
            return;
        }
        if let Err(error) = self.hook.pause_timer().await {
            tracing::warn!(%error, "pause from widget failed");
        }
    }

    pub async fn on_stop(&self) {
        if !self.controls().stop {
            return;
        }
        if let Err(error) = self.hook.stop_timer(None, None).await {
            tracing::warn!(%error, "stop from widget failed");
        }
    }

    pub fn on_reset(&self) {
        self.hook.reset_timer();
    }
}
