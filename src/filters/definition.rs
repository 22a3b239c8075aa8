//! Declarative filter definitions and the options a list page configures its
//! engine with.

use std::time::Duration;

use chrono::NaiveDate;

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::{ScoreBucket, parse_flag};
use crate::filters::date::DateRange;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Filter value meaning "no constraint".
pub const ALL: &str = "all";
/// Search debounce used when a list page does not configure one.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// How a filter value is compared against a record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    /// Field equals the value (status, source, ...).
    Exact,
    /// Text field contains the value, ignoring case (category, label, ...).
    Contains,
    /// Numeric field falls into the named [`ScoreBucket`].
    ScoreBucket,
    /// Boolean field equals the yes/no value. Absent counts as `false`.
    Flag,
}

impl FilterKind {
    /// Evaluation stage; lower stages run first.
    pub(crate) const fn stage(self) -> u8 {
        match self {
            FilterKind::Exact | FilterKind::Contains => 0,
            FilterKind::ScoreBucket => 1,
            FilterKind::Flag => 2,
        }
    }
}

/// A named filter wired to a record field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDefinition {
    pub key: String,
    pub field: String,
    pub kind: FilterKind,
}

impl FilterDefinition {
    pub fn new(key: impl Into<String>, field: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            key: key.into(),
            field: field.into(),
            kind,
        }
    }

    /// Whether `record` passes this filter with `value` selected.
    pub fn matches<T: Record>(&self, record: &T, value: &str) -> bool {
        if value == ALL {
            return true;
        }
        let field = record.field(&self.field);
        match self.kind {
            FilterKind::Exact => matches_exact(field, value),
            FilterKind::Contains => field
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(&value.to_lowercase())),
            FilterKind::ScoreBucket => value
                .parse::<ScoreBucket>()
                .is_ok_and(|bucket| bucket.matches(field.as_number())),
            FilterKind::Flag => {
                parse_flag(value).is_ok_and(|wanted| field.as_flag().unwrap_or(false) == wanted)
            }
        }
    }
}

fn matches_exact(field: FieldValue<'_>, value: &str) -> bool {
    match field {
        FieldValue::Text(text) => text == value,
        FieldValue::Number(n) => value.trim().parse::<f64>().is_ok_and(|v| v == n),
        FieldValue::Flag(b) => parse_flag(value).is_ok_and(|v| v == b),
        FieldValue::Date(_) | FieldValue::Timestamp(_) => value
            .trim()
            .parse::<NaiveDate>()
            .is_ok_and(|day| field.as_date() == Some(day)),
        FieldValue::Missing => false,
    }
}

/// Whether `record`'s date field falls inside `range`. Records without a date
/// never match an active range.
pub(crate) fn matches_date_range<T: Record>(record: &T, field: &str, range: &DateRange) -> bool {
    record
        .field(field)
        .as_date()
        .is_some_and(|day| range.contains(day))
}

/// Case-insensitive substring match against any of `fields`. `needle` must
/// already be lower-cased.
pub(crate) fn matches_search<T: Record>(record: &T, fields: &[String], needle: &str) -> bool {
    fields.iter().any(|name| {
        record
            .field(name)
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Static configuration for one list page.
#[derive(Clone, Debug)]
pub struct DataFilterOptions {
    pub search_fields: Vec<String>,
    pub filters: Vec<FilterDefinition>,
    pub date_field: Option<String>,
    pub default_page_size: usize,
    pub debounce: Duration,
}

impl Default for DataFilterOptions {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            filters: Vec::new(),
            date_field: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl DataFilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a filter. A later definition with the same key replaces the
    /// earlier one.
    pub fn filter(mut self, key: impl Into<String>, field: impl Into<String>, kind: FilterKind) -> Self {
        let definition = FilterDefinition::new(key, field, kind);
        self.filters.retain(|existing| existing.key != definition.key);
        self.filters.push(definition);
        self
    }

    pub fn date_field(mut self, field: impl Into<String>) -> Self {
        self.date_field = Some(field.into());
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size;
        self
    }

    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    pub fn definition(&self, key: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|definition| definition.key == key)
    }
}
