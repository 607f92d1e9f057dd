use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStatsView {
    /// Seconds of closed entries started today (UTC).
    pub today_total: i64,
    pub today_hours: f64,
    pub is_running: bool,
}

pub fn timer_stats(today_total: i64, is_running: bool) -> TimerStatsView {
    let hours = today_total as f64 / 3600.0;
    TimerStatsView {
        today_total,
        today_hours: (hours * 100.0).round() / 100.0,
        is_running,
    }
}
