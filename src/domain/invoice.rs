use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::record::{FieldValue, Record};
use crate::domain::types::InvoiceId;

pub const INVOICE_PAID: &str = "paid";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub desc: String,
    pub qty: f64,
    pub price: f64,
}

/// Invoice issued against a project.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: InvoiceId,
    pub project_id: i32,
    pub project_name: String,
    pub client_name: String,
    pub invoice_number: String,
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub tax_percent: f64,
    pub total: f64,
    pub status: String,
    pub due_date: Option<NaiveDate>,
    pub paid_at: Option<NaiveDateTime>,
    pub notes: String,
    pub created_at: Option<NaiveDateTime>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == INVOICE_PAID
    }
}

impl Record for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> InvoiceId {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "project_id" => Some(self.project_id).into(),
            "project_name" => (&self.project_name).into(),
            "client_name" => (&self.client_name).into(),
            "invoice_number" => (&self.invoice_number).into(),
            "subtotal" => FieldValue::Number(self.subtotal),
            "tax_percent" => FieldValue::Number(self.tax_percent),
            "total" => FieldValue::Number(self.total),
            "status" => (&self.status).into(),
            "due_date" => self.due_date.into(),
            "paid_at" => self.paid_at.into(),
            "notes" => (&self.notes).into(),
            "created_at" => self.created_at.into(),
            _ => FieldValue::Missing,
        }
    }
}
