use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A committed search term remembered for the history dropdown.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchHistoryEntry {
    pub query: String,
    pub searched_at: NaiveDateTime,
}

impl SearchHistoryEntry {
    #[must_use]
    pub fn new(query: impl Into<String>, searched_at: NaiveDateTime) -> Self {
        Self {
            query: query.into(),
            searched_at,
        }
    }

    /// Whether two entries refer to the same search, ignoring case.
    pub fn same_query(&self, other: &str) -> bool {
        self.query.to_lowercase() == other.to_lowercase()
    }
}
