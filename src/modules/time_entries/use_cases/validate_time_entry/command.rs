#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub validated_by: String,
    pub validated_at: i64,
}
