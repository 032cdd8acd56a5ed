use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, title: &str, content: &str) -> Self {
        let title = title.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            title: if title.is_empty() { "Untitled".to_string() } else { title.to_string() },
            content: content.trim().to_string(),
        }
    }
}
