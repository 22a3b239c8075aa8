//! Filter configuration of each dashboard list page.

use crate::domain::record::EntityKind;
use crate::filters::definition::{DataFilterOptions, FilterKind};

pub fn leads() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["title", "company", "location"])
        .filter("source", "source", FilterKind::Exact)
        .filter("status", "status", FilterKind::Exact)
        .filter("score", "match_score", FilterKind::ScoreBucket)
        .date_field("created_at")
}

pub fn prospects() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["name", "address", "phone"])
        .filter("category", "category", FilterKind::Contains)
        .filter("status", "status", FilterKind::Exact)
        .filter("website", "has_website", FilterKind::Flag)
        .filter("score", "match_score", FilterKind::ScoreBucket)
        .date_field("created_at")
}

pub fn campaigns() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["name", "message_template"])
        .filter("status", "status", FilterKind::Exact)
        .filter("target", "target_type", FilterKind::Exact)
        .filter("smart_ai", "smart_ai", FilterKind::Flag)
        .date_field("created_at")
}

pub fn follow_ups() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["lead_title", "lead_company", "note"])
        .filter("status", "status", FilterKind::Exact)
        .filter("type", "type", FilterKind::Exact)
        .date_field("next_follow_date")
}

pub fn projects() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["name", "lead_company", "description"])
        .filter("status", "status", FilterKind::Exact)
        .date_field("created_at")
}

pub fn invoices() -> DataFilterOptions {
    DataFilterOptions::new()
        .search_fields(["invoice_number", "client_name", "project_name"])
        .filter("status", "status", FilterKind::Exact)
        .date_field("created_at")
}

/// Options for the list page of `kind`.
pub fn for_entity(kind: EntityKind) -> DataFilterOptions {
    match kind {
        EntityKind::Leads => leads(),
        EntityKind::Prospects => prospects(),
        EntityKind::Campaigns => campaigns(),
        EntityKind::FollowUps => follow_ups(),
        EntityKind::Projects => projects(),
        EntityKind::Invoices => invoices(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_searches_and_filters_by_date() {
        for kind in [
            EntityKind::Leads,
            EntityKind::Prospects,
            EntityKind::Campaigns,
            EntityKind::FollowUps,
            EntityKind::Projects,
            EntityKind::Invoices,
        ] {
            let options = for_entity(kind);
            assert!(!options.search_fields.is_empty(), "{kind} has no search fields");
            assert!(options.date_field.is_some(), "{kind} has no date field");
            assert!(options.definition("status").is_some(), "{kind} has no status filter");
        }
    }

    #[test]
    fn prospects_filter_category_by_substring() {
        let options = prospects();
        assert_eq!(
            options.definition("category").map(|d| d.kind),
            Some(FilterKind::Contains)
        );
        assert_eq!(
            options.definition("website").map(|d| d.field.as_str()),
            Some("has_website")
        );
    }
}
