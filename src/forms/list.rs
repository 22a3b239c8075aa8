use std::collections::BTreeMap;

use validator::Validate;

use crate::domain::record::Record;
use crate::filters::{Clock, DataFilters, DatePreset};
use crate::forms::FormError;

/// Largest page size a query string may request.
pub const MAX_PAGE_SIZE: usize = 500;

#[derive(Debug, Default, PartialEq, Validate)]
/// URL-encoded state of a list page, e.g.
/// `search=acme&status=won&score=high&days=7&page=2`.
pub struct ListQueryForm {
    /// Free-text search (`search` or `q`).
    pub search: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: Option<usize>,
    /// Date preset, `all` or days back from today.
    pub days: Option<DatePreset>,
    /// Every other non-empty key is treated as a named filter.
    pub filters: BTreeMap<String, String>,
}

fn parse_number(field: &'static str, value: &str) -> Result<usize, FormError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| FormError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl ListQueryForm {
    /// Decodes and validates a query string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Result<Self, FormError> {
        let query = query.trim().trim_start_matches('?');
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query)
            .map_err(|err| FormError::InvalidQuery(err.to_string()))?;

        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" | "q" => form.search = Some(value),
                "page" => form.page = Some(parse_number("page", &value)?),
                "page_size" | "per_page" => {
                    form.page_size = Some(parse_number("page_size", &value)?)
                }
                "days" => form.days = Some(value.parse::<DatePreset>()?),
                _ if value.trim().is_empty() => continue,
                _ => {
                    form.filters.insert(key, value);
                }
            }
        }

        form.validate()?;
        Ok(form)
    }

    /// Replays the form onto `engine` and returns the search term it
    /// committed, if any.
    ///
    /// Page size, filters, date range and search all reset the page, so the
    /// requested page is applied last.
    pub fn apply<T, C>(&self, engine: &mut DataFilters<T, C>) -> Option<String>
    where
        T: Record,
        C: Clock,
    {
        if let Some(page_size) = self.page_size {
            engine.set_page_size(page_size);
        }
        for (key, value) in &self.filters {
            engine.set_filter(key, value.as_str());
        }
        if let Some(days) = self.days {
            engine.apply_date_filter(days);
        }
        let committed = self.search.as_ref().and_then(|search| {
            engine.set_search_query(search.as_str());
            engine.flush_search()
        });
        if let Some(page) = self.page {
            engine.set_current_page(page);
        }
        committed
    }
}
