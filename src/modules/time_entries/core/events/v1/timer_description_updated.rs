#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimerDescriptionUpdatedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub description: String,
    pub updated_at: i64,
}
