use chrono::NaiveDateTime;

use crate::domain::search_history::SearchHistoryEntry;
use crate::repository::{SearchHistoryReader, SearchHistoryWriter};
use crate::services::ServiceResult;

/// Trims a search term for storage. The text is otherwise kept as typed so a
/// remembered term searches exactly like the original. Returns `None` for
/// blank terms.
fn normalize_term(term: &str) -> Option<String> {
    let normalized = term.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

/// Remembers a committed search. Blank terms are ignored; returns whether an
/// entry was written.
pub fn record_search<R>(repo: &R, term: &str, searched_at: NaiveDateTime) -> ServiceResult<bool>
where
    R: SearchHistoryWriter + ?Sized,
{
    let Some(query) = normalize_term(term) else {
        return Ok(false);
    };

    repo.append_history(&SearchHistoryEntry::new(query, searched_at))
        .map_err(|err| {
            log::error!("Failed to record search: {err}");
            err
        })?;

    Ok(true)
}

/// Loads remembered searches, newest first.
pub fn recent_searches<R>(repo: &R) -> ServiceResult<Vec<SearchHistoryEntry>>
where
    R: SearchHistoryReader + ?Sized,
{
    let entries = repo.load_history().map_err(|err| {
        log::error!("Failed to load search history: {err}");
        err
    })?;
    Ok(entries)
}
