use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::LeadId;

/// Job listing collected by the scraper.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: LeadId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: Option<String>,
    pub url: String,
    /// Job board the listing was scraped from.
    pub source: String,
    pub match_score: Option<i32>,
    pub match_reason: Option<String>,
    pub phone: Option<String>,
    pub has_website: Option<bool>,
    pub status: String,
    pub email: Option<String>,
    pub rating: Option<f64>,
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Lead {
    type Id = LeadId;

    fn id(&self) -> LeadId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => (&self.title).into(),
            "company" => (&self.company).into(),
            "location" => (&self.location).into(),
            "description" => (&self.description).into(),
            "url" => (&self.url).into(),
            "source" => (&self.source).into(),
            "match_score" => self.match_score.into(),
            "match_reason" => (&self.match_reason).into(),
            "phone" => (&self.phone).into(),
            "has_website" => self.has_website.into(),
            "status" => (&self.status).into(),
            "email" => (&self.email).into(),
            "rating" => self.rating.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
