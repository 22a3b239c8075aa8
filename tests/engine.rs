use std::time::Duration;

use velora_jobs::domain::lead::Lead;
use velora_jobs::filters::{ALL, DataFilters, DatePreset, DateRange, ManualClock, presets};

mod common;

fn lead_engine(data: Vec<Lead>, page_size: usize) -> (DataFilters<Lead, ManualClock>, ManualClock) {
    let clock = common::clock();
    let options = presets::leads().page_size(page_size);
    (DataFilters::with_clock(data, options, clock.clone()), clock)
}

fn ids(records: &[&Lead]) -> Vec<i32> {
    records.iter().map(|lead| lead.id.get()).collect()
}

#[test]
fn filtered_data_is_an_ordered_subset() {
    let mut data = common::leads(40);
    for lead in data.iter_mut().filter(|lead| lead.id.get() % 3 == 0) {
        lead.status = "contacted".into();
    }
    let (mut engine, _) = lead_engine(data, 25);

    engine.set_filter("status", "contacted");
    engine.apply_date_filter(14);

    let filtered = ids(&engine.filtered_data());
    assert!(!filtered.is_empty());
    assert!(filtered.windows(2).all(|pair| pair[0] < pair[1]));
    for lead in engine.filtered_data() {
        assert!(engine.find(&lead.id).is_some());
        assert_eq!(lead.status, "contacted");
    }
}

#[test]
fn page_length_is_bounded_by_page_size_and_remainder() {
    for total in [0, 1, 24, 25, 26, 57, 100] {
        for page_size in [1, 10, 25] {
            let (mut engine, _) = lead_engine(common::leads(total), page_size);
            let pages = engine.total_pages();
            for page in 1..=pages {
                engine.set_current_page(page);
                let remaining = (total as usize).saturating_sub((page - 1) * page_size);
                assert_eq!(
                    engine.paginated_data().len(),
                    page_size.min(remaining),
                    "total {total}, page size {page_size}, page {page}"
                );
            }
        }
    }
}

#[test]
fn every_state_change_returns_to_first_page() {
    let (mut engine, clock) = lead_engine(common::leads(100), 10);

    engine.set_current_page(4);
    engine.set_filter("source", "linkedin");
    assert_eq!(engine.current_page(), 1);

    engine.set_current_page(4);
    engine.set_search_query("lead");
    clock.advance(Duration::from_millis(300));
    engine.poll_search();
    assert_eq!(engine.current_page(), 1);

    engine.set_current_page(4);
    engine.apply_date_filter(DatePreset::All);
    assert_eq!(engine.current_page(), 1);
}

#[test]
fn rapid_typing_commits_only_the_last_term() {
    let mut data = common::leads(5);
    data[0].title = "abc corp".into();
    data[1].title = "ab testing".into();
    let (mut engine, clock) = lead_engine(data, 25);
    let mut committed = Vec::new();

    for term in ["a", "ab", "abc"] {
        engine.set_search_query(term);
        clock.advance(Duration::from_millis(100));
        committed.extend(engine.poll_search());
    }
    clock.advance(Duration::from_millis(300));
    committed.extend(engine.poll_search());
    clock.advance(Duration::from_secs(5));
    committed.extend(engine.poll_search());

    assert_eq!(committed, vec!["abc".to_string()]);
    assert_eq!(ids(&engine.filtered_data()), vec![1]);
}

#[test]
fn active_filters_combine_with_and() {
    let mut data = common::leads(6);
    data[0].status = "won".into();
    data[0].match_score = Some(90);
    data[1].status = "won".into();
    data[1].match_score = Some(20);
    data[2].status = "new".into();
    data[2].match_score = Some(95);
    let (mut engine, _) = lead_engine(data, 25);

    engine.set_filter("status", "won");
    engine.set_filter("score", "high");

    assert_eq!(ids(&engine.filtered_data()), vec![1]);

    engine.set_filter("score", ALL);
    assert_eq!(ids(&engine.filtered_data()), vec![1, 2]);
}

#[test]
fn date_presets_cover_calendar_days() {
    let (mut engine, _) = lead_engine(common::leads(3), 25);
    let today = common::today();

    engine.apply_date_filter(0);
    assert_eq!(engine.date_range(), Some(DateRange::new(today, today)));
    assert_eq!(
        engine.date_range().map(|range| range.to_string()),
        Some("2026-10-17..2026-10-17".to_string())
    );
    assert_eq!(engine.filter_label(), "Today");

    engine.apply_date_filter(7);
    let week_ago = today.checked_sub_days(chrono::Days::new(7)).unwrap();
    assert_eq!(engine.date_range(), Some(DateRange::new(week_ago, today)));
    assert_eq!(engine.filter_label(), "Last 7 Days");
}

#[test]
fn status_filter_counts_matching_records() {
    let mut data = common::leads(100);
    for index in [4, 41, 87] {
        data[index].status = "won".into();
    }
    let (mut engine, _) = lead_engine(data, 25);

    engine.set_filter("status", "won");

    assert_eq!(engine.total_filtered(), 3);
}

#[test]
fn last_page_holds_the_remainder() {
    let (mut engine, _) = lead_engine(common::leads(57), 25);

    engine.set_current_page(3);

    assert_eq!(engine.current_page(), 3);
    assert_eq!(engine.paginated_data().len(), 7);
    assert_eq!(ids(&engine.paginated_data()), (51..=57).collect::<Vec<_>>());
}

#[test]
fn search_matches_title_ignoring_case() {
    let mut data = common::leads(10);
    data[2].title = "Acme Rust Engineer".into();
    data[6].title = "Senior dev at ACME".into();
    data[8].title = "Macro economist".into();
    let (mut engine, clock) = lead_engine(data, 25);

    engine.set_search_query("Acme");
    assert_eq!(engine.total_filtered(), 10);

    clock.advance(Duration::from_millis(300));
    engine.poll_search();

    assert_eq!(ids(&engine.filtered_data()), vec![3, 7]);
}

#[test]
fn shrinking_result_set_clamps_page_on_read() {
    let mut data = common::leads(150);
    data[10].status = "won".into();
    data[20].status = "won".into();
    let (mut engine, _) = lead_engine(data, 25);
    engine.set_current_page(5);
    assert_eq!(engine.current_page(), 5);

    engine.set_filter("status", "won");
    assert_eq!(ids(&engine.paginated_data()), vec![11, 21]);

    // Replacing the data keeps the stored page; reads clamp it.
    let (mut engine, _) = lead_engine(common::leads(150), 25);
    engine.set_current_page(5);
    engine.set_data(common::leads(2));
    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.paginated_data().len(), 2);
}

#[test]
fn changing_page_size_returns_to_first_page() {
    let (mut engine, _) = lead_engine(common::leads(100), 25);
    engine.set_current_page(4);

    engine.set_page_size(10);

    assert_eq!(engine.current_page(), 1);
    assert_eq!(engine.total_pages(), 10);
}

#[test]
fn view_snapshot_serializes() {
    let (mut engine, _) = lead_engine(common::leads(30), 10);
    engine.set_filter("status", "new");
    engine.apply_date_filter(7);

    let json = serde_json::to_value(engine.view()).unwrap();

    assert_eq!(json["filter_label"], "Last 7 Days");
    assert_eq!(json["filters"]["status"], "new");
    assert_eq!(json["date_range"]["start"], "2026-10-10");
    assert_eq!(json["items"]["page"], 1);
}
