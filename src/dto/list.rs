use std::collections::BTreeMap;

use serde::Serialize;

use crate::filters::DateRange;
use crate::pagination::Paginated;

/// Snapshot of a list page handed to renderers and the JSON output.
#[derive(Debug, Serialize)]
pub struct ListView<T> {
    /// Current page of records and the page buttons to show.
    pub items: Paginated<T>,
    pub page_size: usize,
    /// Choices offered by the page-size selector.
    pub page_size_options: &'static [usize],
    /// Number of records before filtering.
    pub total: usize,
    pub total_filtered: usize,
    pub total_pages: usize,
    /// 1-based position of the first record on the page, 0 when empty.
    pub start_item: usize,
    pub end_item: usize,
    /// Applied (debounced) search term.
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub date_range: Option<DateRange>,
    pub filter_label: String,
}
