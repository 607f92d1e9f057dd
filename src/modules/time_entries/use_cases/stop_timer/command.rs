#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimer {
    pub user_id: String,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub stopped_at: i64,
}
