use chrono::NaiveDate;

use crate::domain::follow_up::{FOLLOW_UP_PENDING, FollowUp};
use crate::domain::invoice::Invoice;
use crate::domain::project::{PROJECT_ACTIVE, Project};
use crate::dto::pipeline::PipelineSummary;

/// Computes the figures shown above the pipeline tabs.
pub fn summarize(
    follow_ups: &[FollowUp],
    projects: &[Project],
    invoices: &[Invoice],
    today: NaiveDate,
) -> PipelineSummary {
    PipelineSummary {
        pending_follow_ups: follow_ups
            .iter()
            .filter(|f| f.status == FOLLOW_UP_PENDING)
            .count(),
        overdue_follow_ups: follow_ups.iter().filter(|f| f.is_overdue(today)).count(),
        active_projects: projects.iter().filter(|p| p.status == PROJECT_ACTIVE).count(),
        invoices: invoices.len(),
        paid_total: invoices
            .iter()
            .filter(|i| i.is_paid())
            .map(|i| i.total)
            .sum(),
    }
}
