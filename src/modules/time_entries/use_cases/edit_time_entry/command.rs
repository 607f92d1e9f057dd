#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub edited_at: i64,
}
