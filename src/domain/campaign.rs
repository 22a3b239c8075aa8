use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::CampaignId;

/// WhatsApp outreach campaign.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub status: String,
    pub message_template: Option<String>,
    pub target_criteria: Option<String>,
    /// Either `leads` or `prospects`.
    pub target_type: Option<String>,
    pub template_id: Option<i32>,
    pub sent_count: Option<i32>,
    pub failed_count: Option<i32>,
    pub scheduled_at: Option<NaiveDateTime>,
    pub smart_ai: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Campaign {
    type Id = CampaignId;

    fn id(&self) -> CampaignId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "name" => (&self.name).into(),
            "status" => (&self.status).into(),
            "message_template" => (&self.message_template).into(),
            "target_criteria" => (&self.target_criteria).into(),
            "target_type" => (&self.target_type).into(),
            "template_id" => self.template_id.into(),
            "sent_count" => self.sent_count.into(),
            "failed_count" => self.failed_count.into(),
            "scheduled_at" => self.scheduled_at.into(),
            "smart_ai" => self.smart_ai.into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
