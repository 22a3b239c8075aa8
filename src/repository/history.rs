//! Search history stores capped to a fixed number of entries.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::search_history::SearchHistoryEntry;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{SearchHistoryReader, SearchHistoryWriter};

/// Puts `entry` in front, drops older entries for the same query and trims
/// the list to `limit`.
fn push_front(entries: &mut Vec<SearchHistoryEntry>, entry: &SearchHistoryEntry, limit: usize) {
    entries.retain(|existing| !existing.same_query(&entry.query));
    entries.insert(0, entry.clone());
    entries.truncate(limit);
}

/// History persisted as a JSON array, newest first.
#[derive(Clone, Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
    limit: usize,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit: limit.max(1),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &[SearchHistoryEntry]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(entries)?;
        // Write next to the target and rename so readers never see a partial file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SearchHistoryReader for JsonHistoryStore {
    fn load_history(&self) -> RepositoryResult<Vec<SearchHistoryEntry>> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let mut entries: Vec<SearchHistoryEntry> = serde_json::from_slice(&bytes)?;
                entries.truncate(self.limit);
                Ok(entries)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(RepositoryError::from(err)),
        }
    }
}

impl SearchHistoryWriter for JsonHistoryStore {
    fn append_history(&self, entry: &SearchHistoryEntry) -> RepositoryResult<()> {
        let mut entries = self.load_history()?;
        push_front(&mut entries, entry, self.limit);
        self.write(&entries)
    }
}

/// History kept in memory for the lifetime of the store.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    entries: RefCell<Vec<SearchHistoryEntry>>,
    limit: usize,
}

impl InMemoryHistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            limit: limit.max(1),
        }
    }
}

impl SearchHistoryReader for InMemoryHistoryStore {
    fn load_history(&self) -> RepositoryResult<Vec<SearchHistoryEntry>> {
        Ok(self.entries.borrow().clone())
    }
}

impl SearchHistoryWriter for InMemoryHistoryStore {
    fn append_history(&self, entry: &SearchHistoryEntry) -> RepositoryResult<()> {
        push_front(&mut self.entries.borrow_mut(), entry, self.limit.max(1));
        Ok(())
    }
}
