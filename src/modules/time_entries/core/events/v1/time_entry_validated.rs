#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryValidatedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub validated_by: String,
    pub validated_at: i64,
}
