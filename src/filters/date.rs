//! Quick date-range presets ("Today", "Last 7 Days", ...).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::types::TypeConstraintError;

pub const ALL_TIME_LABEL: &str = "All Time";

/// A quick date filter: everything, or a number of days back from today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatePreset {
    All,
    DaysBack(u32),
}

impl DatePreset {
    /// Text shown next to the record count.
    pub fn label(self) -> String {
        match self {
            DatePreset::All => ALL_TIME_LABEL.to_string(),
            DatePreset::DaysBack(0) => "Today".to_string(),
            DatePreset::DaysBack(1) => "Yesterday".to_string(),
            DatePreset::DaysBack(n) => format!("Last {n} Days"),
        }
    }

    /// Inclusive range covered by the preset relative to `today`.
    pub fn range(self, today: NaiveDate) -> Option<DateRange> {
        match self {
            DatePreset::All => None,
            DatePreset::DaysBack(0) => Some(DateRange::new(today, today)),
            DatePreset::DaysBack(1) => {
                let yesterday = days_before(today, 1);
                Some(DateRange::new(yesterday, yesterday))
            }
            DatePreset::DaysBack(n) => Some(DateRange::new(days_before(today, n), today)),
        }
    }
}

fn days_before(day: NaiveDate, n: u32) -> NaiveDate {
    day.checked_sub_days(Days::new(u64::from(n)))
        .unwrap_or(NaiveDate::MIN)
}

impl From<u32> for DatePreset {
    fn from(days: u32) -> Self {
        DatePreset::DaysBack(days)
    }
}

impl FromStr for DatePreset {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(DatePreset::All);
        }
        trimmed
            .parse::<u32>()
            .map(DatePreset::DaysBack)
            .map_err(|_| TypeConstraintError::InvalidDatePreset(trimmed.to_string()))
    }
}

impl Display for DatePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatePreset::All => f.write_str("all"),
            DatePreset::DaysBack(n) => write!(f, "{n}"),
        }
    }
}

/// Inclusive calendar-day range. Serializes as `YYYY-MM-DD` strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
