#![allow(dead_code)]

use std::io::Write;

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tempfile::NamedTempFile;
use velora_jobs::domain::lead::Lead;
use velora_jobs::domain::prospect::Prospect;
use velora_jobs::domain::types::{LeadId, ProspectId};
use velora_jobs::filters::ManualClock;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
}

pub fn clock() -> ManualClock {
    ManualClock::new(today())
}

/// Midday `days` days before [`today`].
pub fn days_ago(days: u64) -> NaiveDateTime {
    today()
        .checked_sub_days(Days::new(days))
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn lead(id: i32, title: &str, status: &str) -> Lead {
    Lead {
        id: LeadId::new(id).unwrap(),
        title: title.to_string(),
        company: format!("Company {id}"),
        location: "Remote".to_string(),
        description: None,
        url: format!("https://jobs.example.com/{id}"),
        source: "linkedin".to_string(),
        match_score: None,
        match_reason: None,
        phone: None,
        has_website: None,
        status: status.to_string(),
        email: None,
        rating: None,
        created_at: Some(days_ago(u64::try_from(id).unwrap() % 30)),
    }
}

/// `count` leads titled "Lead {id}", all with status `new`.
pub fn leads(count: i32) -> Vec<Lead> {
    (1..=count).map(|id| lead(id, &format!("Lead {id}"), "new")).collect()
}

pub fn prospect(id: i32, name: &str, category: &str) -> Prospect {
    Prospect {
        id: ProspectId::new(id).unwrap(),
        name: name.to_string(),
        category: category.to_string(),
        address: Some("1 Main St".to_string()),
        phone: format!("+1 555 010{id}"),
        email: None,
        website: None,
        has_website: false,
        rating: Some(4.5),
        review_count: Some(12),
        maps_url: None,
        match_score: None,
        match_reason: None,
        status: "new".to_string(),
        source_keyword: None,
        created_at: Some(days_ago(1)),
        updated_at: None,
    }
}

/// Writes `records` as a JSON array to a temporary file.
pub fn write_records<T: Serialize>(records: &[T]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(&serde_json::to_vec(records).unwrap())
        .unwrap();
    file
}
