use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::ProspectId;

/// Local business found through a maps search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Prospect {
    pub id: ProspectId,
    pub name: String,
    pub category: String,
    pub address: Option<String>,
    pub phone: String,
    pub email: Option<String>,
    pub website: Option<String>,
    pub has_website: bool,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub maps_url: Option<String>,
    pub match_score: Option<i32>,
    pub match_reason: Option<String>,
    pub status: String,
    /// Search keyword that surfaced this business.
    pub source_keyword: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Record for Prospect {
    type Id = ProspectId;

    fn id(&self) -> ProspectId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => (&self.name).into(),
            "category" => (&self.category).into(),
            "address" => (&self.address).into(),
            "phone" => (&self.phone).into(),
            "email" => (&self.email).into(),
            "website" => (&self.website).into(),
            "has_website" => FieldValue::Flag(self.has_website),
            "rating" => self.rating.into(),
            "review_count" => self.review_count.into(),
            "maps_url" => (&self.maps_url).into(),
            "match_score" => self.match_score.into(),
            "match_reason" => (&self.match_reason).into(),
            "status" => (&self.status).into(),
            "source_keyword" => (&self.source_keyword).into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
