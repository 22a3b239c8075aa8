use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::ProjectId;

pub const PROJECT_ACTIVE: &str = "active";

/// Paid engagement created from a won lead.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub lead_id: i32,
    pub lead_title: String,
    pub lead_company: String,
    pub name: String,
    pub description: String,
    pub status: String,
    pub budget: Option<f64>,
    pub deadline: Option<NaiveDate>,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    pub invoice_count: i32,
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub created_at: Option<NaiveDateTime>,
}

impl Record for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "lead_id" => Some(self.lead_id).into(),
            "lead_title" => (&self.lead_title).into(),
            "lead_company" => (&self.lead_company).into(),
            "name" => (&self.name).into(),
            "description" => (&self.description).into(),
            "status" => (&self.status).into(),
            "budget" => self.budget.into(),
            "deadline" => self.deadline.into(),
            "progress" => Some(self.progress).into(),
            "invoice_count" => Some(self.invoice_count).into(),
            "total_invoiced" => FieldValue::Number(self.total_invoiced),
            "total_paid" => FieldValue::Number(self.total_paid),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
