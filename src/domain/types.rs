//! Strongly-typed value objects used by domain entities and the list engine.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! positive page sizes, known score buckets) so that once a value reaches the
//! filtering layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided page size is zero.
    #[error("page size must be greater than zero")]
    ZeroPageSize,
    /// Score bucket name is not one of `high`, `mid`, `low`, `unscored`.
    #[error("unknown score bucket: {0}")]
    InvalidScoreBucket(String),
    /// Flag value is not one of `yes`, `no`, `true`, `false`.
    #[error("unknown flag value: {0}")]
    InvalidFlag(String),
    /// Date preset is neither `all` nor a non-negative number of days.
    #[error("invalid date preset: {0}")]
    InvalidDatePreset(String),
    /// Entity name does not match any list page.
    #[error("unknown entity: {0}")]
    InvalidEntity(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(LeadId, "Unique identifier for a scraped lead.");
id_newtype!(ProspectId, "Unique identifier for a business prospect.");
id_newtype!(CampaignId, "Unique identifier for an outreach campaign.");
id_newtype!(FollowUpId, "Unique identifier for a pipeline follow-up.");
id_newtype!(ProjectId, "Unique identifier for a won project.");
id_newtype!(InvoiceId, "Unique identifier for a project invoice.");

/// Number of records shown on one page. Always at least one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a page size, rejecting zero.
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        if value == 0 {
            Err(TypeConstraintError::ZeroPageSize)
        } else {
            Ok(Self(value))
        }
    }

    /// Creates a page size, normalizing zero to one.
    pub fn coerce(value: usize) -> Self {
        Self(value.max(1))
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(crate::pagination::DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Lower bound (inclusive) of the `mid` score bucket.
pub const MID_SCORE_THRESHOLD: f64 = 50.0;
/// Lower bound (inclusive) of the `high` score bucket.
pub const HIGH_SCORE_THRESHOLD: f64 = 75.0;

/// Categorical grouping of an AI match score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBucket {
    /// Score of 75 or more.
    High,
    /// Score from 50 up to, but not including, 75.
    Mid,
    /// Score below 50.
    Low,
    /// Record has not been scored yet.
    Unscored,
}

impl ScoreBucket {
    /// Returns the bucket a score falls into.
    pub fn of(score: Option<f64>) -> Self {
        match score {
            None => Self::Unscored,
            Some(s) if s >= HIGH_SCORE_THRESHOLD => Self::High,
            Some(s) if s >= MID_SCORE_THRESHOLD => Self::Mid,
            Some(_) => Self::Low,
        }
    }

    /// Whether a score belongs to this bucket. Unscored records only match
    /// [`ScoreBucket::Unscored`].
    pub fn matches(self, score: Option<f64>) -> bool {
        Self::of(score) == self
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Mid => "mid",
            Self::Low => "low",
            Self::Unscored => "unscored",
        }
    }
}

impl Display for ScoreBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreBucket {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "mid" => Ok(Self::Mid),
            "low" => Ok(Self::Low),
            "unscored" => Ok(Self::Unscored),
            other => Err(TypeConstraintError::InvalidScoreBucket(other.to_string())),
        }
    }
}

/// Parses the yes/no vocabulary used by boolean filter dropdowns.
pub fn parse_flag(value: &str) -> Result<bool, TypeConstraintError> {
    match value.trim().to_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        other => Err(TypeConstraintError::InvalidFlag(other.to_string())),
    }
}
