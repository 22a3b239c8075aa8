//! The contract every list-page entity fulfils so the filter engine can stay
//! generic over the concrete record type.

use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// A single field value as seen by filters and search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Flag(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Missing,
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match *self {
            FieldValue::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            FieldValue::Flag(b) => Some(b),
            _ => None,
        }
    }

    /// Calendar day of a date or timestamp; time of day is discarded.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match *self {
            FieldValue::Date(d) => Some(d),
            FieldValue::Timestamp(ts) => Some(ts.date()),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for FieldValue<'a> {
    fn from(value: &'a Option<String>) -> Self {
        value.as_deref().map_or(FieldValue::Missing, FieldValue::Text)
    }
}

impl From<Option<i32>> for FieldValue<'_> {
    fn from(value: Option<i32>) -> Self {
        value.map_or(FieldValue::Missing, |n| FieldValue::Number(f64::from(n)))
    }
}

impl From<Option<f64>> for FieldValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Number)
    }
}

impl From<Option<bool>> for FieldValue<'_> {
    fn from(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Flag)
    }
}

impl From<Option<NaiveDate>> for FieldValue<'_> {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Date)
    }
}

impl From<Option<NaiveDateTime>> for FieldValue<'_> {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Timestamp)
    }
}

/// An entity shown on a list page.
pub trait Record {
    /// Stable identity used for keying and selection.
    type Id: Clone + Debug + Eq + Hash;

    fn id(&self) -> Self::Id;

    /// Looks up a field by its API name. Unknown names yield
    /// [`FieldValue::Missing`].
    fn field(&self, name: &str) -> FieldValue<'_>;
}

/// The list pages of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Leads,
    Prospects,
    Campaigns,
    FollowUps,
    Projects,
    Invoices,
}

impl EntityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Leads => "leads",
            Self::Prospects => "prospects",
            Self::Campaigns => "campaigns",
            Self::FollowUps => "follow-ups",
            Self::Projects => "projects",
            Self::Invoices => "invoices",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leads" => Ok(Self::Leads),
            "prospects" => Ok(Self::Prospects),
            "campaigns" => Ok(Self::Campaigns),
            "follow-ups" | "followups" | "follow_ups" => Ok(Self::FollowUps),
            "projects" => Ok(Self::Projects),
            "invoices" => Ok(Self::Invoices),
            other => Err(TypeConstraintError::InvalidEntity(other.to_string())),
        }
    }
}
