/// A closed entry's interval or texts were corrected. Interval fields carry the resolved
/// values; texts replace the stored ones only when present.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimeEntryEditedV1 {
    pub time_entry_id: String,
    pub user_id: String,
    pub start_time: i64,
    pub end_time: i64,
    pub duration: i64,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub edited_at: i64,
}
