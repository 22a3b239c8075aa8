use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::FollowUpId;

pub const FOLLOW_UP_PENDING: &str = "pending";

/// Scheduled contact with a lead on the pipeline board.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FollowUp {
    pub id: FollowUpId,
    pub lead_id: i32,
    pub lead_title: String,
    pub lead_company: String,
    /// Contact channel, e.g. `wa`, `email`, `call`.
    #[serde(rename = "type")]
    pub kind: String,
    pub note: String,
    pub status: String,
    pub next_follow_date: Option<NaiveDate>,
    pub created_at: Option<NaiveDateTime>,
}

impl FollowUp {
    /// A pending follow-up whose date is strictly before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == FOLLOW_UP_PENDING && self.next_follow_date.is_some_and(|date| date < today)
    }
}

impl Record for FollowUp {
    type Id = FollowUpId;

    fn id(&self) -> FollowUpId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "lead_id" => Some(self.lead_id).into(),
            "lead_title" => (&self.lead_title).into(),
            "lead_company" => (&self.lead_company).into(),
            "type" => (&self.kind).into(),
            "note" => (&self.note).into(),
            "status" => (&self.status).into(),
            "next_follow_date" => self.next_follow_date.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
