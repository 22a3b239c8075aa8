use chrono::{NaiveDateTime, TimeDelta};
use velora_jobs::domain::search_history::SearchHistoryEntry;
use velora_jobs::models::config::DEFAULT_HISTORY_LIMIT;
use velora_jobs::repository::{JsonHistoryStore, SearchHistoryReader, SearchHistoryWriter};
use velora_jobs::services::history::{record_search, recent_searches};

mod common;

fn at(minutes: i64) -> NaiveDateTime {
    common::days_ago(0) + TimeDelta::minutes(minutes)
}

#[test]
fn missing_file_loads_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"), DEFAULT_HISTORY_LIMIT);

    assert!(store.load_history().unwrap().is_empty());
}

#[test]
fn entries_persist_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/history.json");
    let store = JsonHistoryStore::new(&path, DEFAULT_HISTORY_LIMIT);

    store
        .append_history(&SearchHistoryEntry::new("rust", at(0)))
        .unwrap();
    store
        .append_history(&SearchHistoryEntry::new("acme", at(1)))
        .unwrap();

    let reopened = JsonHistoryStore::new(&path, DEFAULT_HISTORY_LIMIT);
    let queries: Vec<String> = reopened
        .load_history()
        .unwrap()
        .into_iter()
        .map(|entry| entry.query)
        .collect();
    assert_eq!(queries, vec!["acme", "rust"]);
}

#[test]
fn repeated_query_moves_to_front() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"), DEFAULT_HISTORY_LIMIT);

    for (minute, query) in ["rust", "acme", "RUST"].into_iter().enumerate() {
        store
            .append_history(&SearchHistoryEntry::new(query, at(minute as i64)))
            .unwrap();
    }

    let entries = store.load_history().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].query, "RUST");
    assert_eq!(entries[0].searched_at, at(2));
    assert_eq!(entries[1].query, "acme");
}

#[test]
fn history_is_capped() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"), DEFAULT_HISTORY_LIMIT);

    for n in 0..60 {
        store
            .append_history(&SearchHistoryEntry::new(format!("query {n}"), at(n)))
            .unwrap();
    }

    let entries = store.load_history().unwrap();
    assert_eq!(entries.len(), DEFAULT_HISTORY_LIMIT);
    assert_eq!(entries[0].query, "query 59");
    assert_eq!(entries[DEFAULT_HISTORY_LIMIT - 1].query, "query 10");
}

#[test]
fn services_trim_and_skip_blank_terms() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"), DEFAULT_HISTORY_LIMIT);

    assert!(!record_search(&store, "   ", at(0)).unwrap());
    assert!(record_search(&store, "  acme ", at(1)).unwrap());

    let entries = recent_searches(&store).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].query, "acme");
}

#[test]
fn special_characters_survive_the_history_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonHistoryStore::new(dir.path().join("history.json"), DEFAULT_HISTORY_LIMIT);

    assert!(record_search(&store, "R&D", at(0)).unwrap());
    assert!(record_search(&store, "price < 100", at(1)).unwrap());

    let queries: Vec<String> = recent_searches(&store)
        .unwrap()
        .into_iter()
        .map(|entry| entry.query)
        .collect();
    assert_eq!(queries, vec!["price < 100", "R&D"]);
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();
    let store = JsonHistoryStore::new(&path, DEFAULT_HISTORY_LIMIT);

    assert!(store.load_history().is_err());
    assert!(recent_searches(&store).is_err());
}
