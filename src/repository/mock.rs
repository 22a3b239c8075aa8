//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::search_history::SearchHistoryEntry;
use crate::repository::errors::RepositoryResult;
use crate::repository::{SearchHistoryReader, SearchHistoryWriter};

mock! {
    pub Repository {}

    impl SearchHistoryReader for Repository {
        fn load_history(&self) -> RepositoryResult<Vec<SearchHistoryEntry>>;
    }

    impl SearchHistoryWriter for Repository {
        fn append_history(&self, entry: &SearchHistoryEntry) -> RepositoryResult<()>;
    }
}
