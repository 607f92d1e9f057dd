#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTimer {
    pub user_id: String,
    pub description: Option<String>,
    pub updated_at: i64,
}
