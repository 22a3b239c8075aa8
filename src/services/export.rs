use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::prospect::Prospect;
use crate::services::{ServiceError, ServiceResult};

/// One spreadsheet row of the prospects export.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProspectRow<'a> {
    name: &'a str,
    category: &'a str,
    address: &'a str,
    phone: &'a str,
    email: &'a str,
    website: &'a str,
    rating: Option<f64>,
    reviews: Option<i32>,
    score: Option<i32>,
    status: &'a str,
    #[serde(rename = "MapsURL")]
    maps_url: &'a str,
}

impl<'a> From<&'a Prospect> for ProspectRow<'a> {
    fn from(p: &'a Prospect) -> Self {
        Self {
            name: &p.name,
            category: &p.category,
            address: p.address.as_deref().unwrap_or_default(),
            phone: &p.phone,
            email: p.email.as_deref().unwrap_or_default(),
            website: p.website.as_deref().unwrap_or_default(),
            rating: p.rating,
            reviews: p.review_count,
            score: p.match_score,
            status: &p.status,
            maps_url: p.maps_url.as_deref().unwrap_or_default(),
        }
    }
}

/// File name offered for an export made on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("prospects_export_{}.csv", today.format("%Y-%m-%d"))
}

/// Writes the given (already filtered) prospects as CSV with a header row.
/// Returns the number of data rows written.
pub fn export_prospects_csv<W: Write>(prospects: &[&Prospect], writer: W) -> ServiceResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for prospect in prospects {
        csv_writer
            .serialize(ProspectRow::from(*prospect))
            .map_err(|err| {
                log::error!("Failed to write prospect {}: {err}", prospect.id);
                ServiceError::Internal(err.to_string())
            })?;
    }
    csv_writer
        .flush()
        .map_err(|err| ServiceError::Internal(err.to_string()))?;
    Ok(prospects.len())
}
