//! Persistence collaborators used by the list services.

use crate::domain::search_history::SearchHistoryEntry;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod history;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use history::{InMemoryHistoryStore, JsonHistoryStore};

pub trait SearchHistoryReader {
    /// Returns remembered searches, newest first.
    fn load_history(&self) -> RepositoryResult<Vec<SearchHistoryEntry>>;
}

pub trait SearchHistoryWriter {
    /// Remembers a search, keeping only the most recent entries.
    fn append_history(&self, entry: &SearchHistoryEntry) -> RepositoryResult<()>;
}
