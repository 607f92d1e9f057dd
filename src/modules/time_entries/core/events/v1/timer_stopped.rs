// The running entry was closed. `duration` is in whole seconds.
// `description` and `notes` are only present when they replace the stored values.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimerStoppedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub stopped_at: i64,
    pub duration: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
}
