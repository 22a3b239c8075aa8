//! Client-side filtering, search debouncing and pagination for list pages.
//!
//! [`DataFilters`] owns an already-fetched collection of records together with
//! the ephemeral view state of one list page: the raw and debounced search
//! term, named filter values, an optional date range and the current page.
//! The filtered set is recomputed synchronously whenever an input changes, so
//! every read reflects the current state.
//!
//! Filters are combined with AND semantics and evaluated in a fixed order:
//! exact/contains filters, score buckets, boolean flags, the date range and
//! finally the debounced search term.

use std::collections::BTreeMap;

use crate::domain::record::Record;
use crate::domain::types::PageSize;
use crate::dto::list::ListView;
use crate::pagination::{self, Paginated};

pub mod clock;
pub mod date;
pub mod debounce;
pub mod definition;
pub mod presets;

pub use clock::{Clock, ManualClock, SystemClock};
pub use date::{ALL_TIME_LABEL, DatePreset, DateRange};
pub use debounce::Debouncer;
pub use definition::{ALL, DEFAULT_DEBOUNCE, DataFilterOptions, FilterDefinition, FilterKind};

use definition::{matches_date_range, matches_search};

/// Filter, search and pagination state for one list page.
///
/// The debounce timer is passive: a pending search term is only committed by
/// [`poll_search`](Self::poll_search) (once the delay has passed) or
/// [`flush_search`](Self::flush_search). Reads such as
/// [`filtered_data`](Self::filtered_data) never advance it, so callers poll on
/// every tick or before rendering. Dropping the engine discards a pending term.
pub struct DataFilters<T, C = SystemClock> {
    data: Vec<T>,
    options: DataFilterOptions,
    clock: C,
    search_query: String,
    debounced_search: String,
    search_timer: Debouncer<String>,
    show_search: bool,
    filters: BTreeMap<String, String>,
    date_range: Option<DateRange>,
    filter_label: String,
    current_page: usize,
    page_size: PageSize,
    filtered: Vec<usize>,
}

impl<T: Record> DataFilters<T> {
    pub fn new(data: Vec<T>, options: DataFilterOptions) -> Self {
        Self::with_clock(data, options, SystemClock)
    }
}

impl<T: Record, C: Clock> DataFilters<T, C> {
    pub fn with_clock(data: Vec<T>, mut options: DataFilterOptions, clock: C) -> Self {
        options.filters.sort_by_key(|definition| definition.kind.stage());
        let page_size = PageSize::coerce(options.default_page_size);
        let search_timer = Debouncer::new(options.debounce);
        let mut engine = Self {
            data,
            options,
            clock,
            search_query: String::new(),
            debounced_search: String::new(),
            search_timer,
            show_search: false,
            filters: BTreeMap::new(),
            date_range: None,
            filter_label: ALL_TIME_LABEL.to_string(),
            current_page: 1,
            page_size,
            filtered: Vec::new(),
        };
        engine.refilter();
        engine
    }

    /// Replaces the collection, e.g. after a re-fetch. The current page is
    /// kept and clamped on read.
    pub fn set_data(&mut self, data: Vec<T>) {
        self.data = data;
        self.refilter();
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn options(&self) -> &DataFilterOptions {
        &self.options
    }

    /// Looks up a record by id among all records, filtered or not.
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.data.iter().find(|record| &record.id() == id)
    }

    /// Removes a record ahead of the next re-fetch (optimistic delete).
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let position = self.data.iter().position(|record| &record.id() == id)?;
        let removed = self.data.remove(position);
        self.refilter();
        Some(removed)
    }

    // Search

    /// Updates the raw query immediately and (re)arms the debounce timer.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.search_timer.schedule(query.clone(), self.clock.now());
        self.search_query = query;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Term the filtered set currently reflects.
    pub fn debounced_search(&self) -> &str {
        &self.debounced_search
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_timer.is_pending()
    }

    /// Commits the pending search term once the debounce delay has elapsed.
    /// Returns the newly applied term when it differs from the previous one.
    pub fn poll_search(&mut self) -> Option<String> {
        let term = self.search_timer.poll(self.clock.now())?;
        self.commit_search(term)
    }

    /// Commits the pending search term without waiting for the delay.
    pub fn flush_search(&mut self) -> Option<String> {
        let term = self.search_timer.flush()?;
        self.commit_search(term)
    }

    /// Drops a pending search term; the applied term stays unchanged.
    pub fn cancel_search(&mut self) {
        if self.search_timer.cancel() {
            log::debug!("Cancelled pending search {:?}", self.search_query);
        }
    }

    pub fn show_search(&self) -> bool {
        self.show_search
    }

    pub fn set_show_search(&mut self, show: bool) {
        self.show_search = show;
    }

    fn commit_search(&mut self, term: String) -> Option<String> {
        if term == self.debounced_search {
            return None;
        }
        self.debounced_search = term.clone();
        self.current_page = 1;
        self.refilter();
        Some(term)
    }

    // Filters

    /// Sets a named filter. `"all"` disables it. Keys that were not registered
    /// in [`DataFilterOptions`] are ignored.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        if self.options.definition(key).is_none() {
            log::debug!("Ignoring unknown filter key {key:?}");
            return;
        }
        self.filters.insert(key.to_string(), value.into());
        self.current_page = 1;
        self.refilter();
    }

    /// Current value of a filter, `"all"` when unset.
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map_or(ALL, String::as_str)
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Applies a quick date preset relative to the clock's current day.
    pub fn apply_date_filter(&mut self, preset: impl Into<DatePreset>) {
        let preset = preset.into();
        self.date_range = preset.range(self.clock.today());
        self.filter_label = preset.label();
        if self.options.date_field.is_none() {
            log::debug!("Date preset {preset} has no date field to apply to");
        }
        self.current_page = 1;
        self.refilter();
    }

    pub fn date_range(&self) -> Option<DateRange> {
        self.date_range
    }

    pub fn filter_label(&self) -> &str {
        &self.filter_label
    }

    // Pagination

    /// Sets the page size and returns to the first page. Zero is coerced to one.
    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("Page size 0 coerced to 1");
        }
        self.page_size = PageSize::coerce(page_size);
        self.current_page = 1;
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Moves to `page`, clamped into the valid range.
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = pagination::clamp_page(page, self.total_pages());
    }

    /// Current 1-based page, clamped against the filtered set as it is now.
    pub fn current_page(&self) -> usize {
        pagination::clamp_page(self.current_page, self.total_pages())
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size.get())
    }

    // Derived output

    /// Every record passing all active filters, in input order.
    pub fn filtered_data(&self) -> Vec<&T> {
        self.filtered.iter().map(|&index| &self.data[index]).collect()
    }

    /// The records on the current page.
    pub fn paginated_data(&self) -> Vec<&T> {
        let bounds = pagination::page_bounds(
            self.current_page(),
            self.page_size.get(),
            self.filtered.len(),
        );
        self.filtered[bounds]
            .iter()
            .map(|&index| &self.data[index])
            .collect()
    }

    pub fn total_filtered(&self) -> usize {
        self.filtered.len()
    }

    /// Current page together with the page buttons to render.
    pub fn paginated(&self) -> Paginated<&T> {
        Paginated::new(self.paginated_data(), self.current_page(), self.total_pages())
    }

    /// Serializable snapshot of the list page.
    pub fn view(&self) -> ListView<T>
    where
        T: Clone,
    {
        let page = self.current_page();
        let (start_item, end_item) =
            pagination::item_range(page, self.page_size.get(), self.filtered.len());
        let items = self.paginated_data().into_iter().cloned().collect();

        ListView {
            items: Paginated::new(items, page, self.total_pages()),
            page_size: self.page_size.get(),
            page_size_options: &pagination::PAGE_SIZE_OPTIONS,
            total: self.data.len(),
            total_filtered: self.filtered.len(),
            total_pages: self.total_pages(),
            start_item,
            end_item,
            search: self.debounced_search.clone(),
            filters: self.filters.clone(),
            date_range: self.date_range,
            filter_label: self.filter_label.clone(),
        }
    }

    fn refilter(&mut self) {
        let needle = self.debounced_search.to_lowercase();
        let active: Vec<(&FilterDefinition, &str)> = self
            .options
            .filters
            .iter()
            .filter_map(|definition| {
                self.filters
                    .get(&definition.key)
                    .map(|value| (definition, value.as_str()))
            })
            .filter(|(_, value)| *value != ALL)
            .collect();
        let date_filter = self
            .options
            .date_field
            .as_deref()
            .zip(self.date_range.as_ref());

        self.filtered = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                active
                    .iter()
                    .all(|(definition, value)| definition.matches(*record, value))
                    && date_filter.is_none_or(|(field, range)| matches_date_range(*record, field, range))
                    && (needle.is_empty()
                        || matches_search(*record, &self.options.search_fields, &needle))
            })
            .map(|(index, _)| index)
            .collect();
    }
}
