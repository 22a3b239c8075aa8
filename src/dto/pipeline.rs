use serde::Serialize;

/// Header figures of the pipeline page tabs.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct PipelineSummary {
    pub pending_follow_ups: usize,
    pub overdue_follow_ups: usize,
    pub active_projects: usize,
    pub invoices: usize,
    pub paid_total: f64,
}
