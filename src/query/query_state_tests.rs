//! Tests for QueryState

use std::sync::Mutex;

use super::*;
use crate::query::FetchError;
use proptest::prelude::*;

fn labels(settlement: Settlement<()>) -> Vec<String> {
    match settlement {
        Settlement::Resolved(items) => items.into_iter().map(|s| s.label).collect(),
        other => panic!("expected Resolved, got {:?}", other),
    }
}

#[test]
fn test_new_uses_initial_text() {
    let state = QueryState::new("bolt", 1);
    assert_eq!(state.text(), "bolt");
    assert!(!state.is_loading());
    assert_eq!(state.last_accepted(), "");
}

#[test]
fn test_short_query_does_not_qualify() {
    let mut state = QueryState::new("", 3);
    assert!(!state.on_query_change("ap"));
    // Text is still tracked
    assert_eq!(state.text(), "ap");
    assert!(state.on_query_change("app"));
}

#[test]
fn test_empty_query_always_qualifies() {
    let mut state = QueryState::new("abc", 5);
    assert!(state.on_query_change(""));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let state = QueryState::new("", 3);
    assert!(!state.qualifies("éé"));
    assert!(state.qualifies("ééé"));
}

#[test]
fn test_initial_empty_query_is_not_fetched() {
    let mut state = QueryState::new("", 1);
    assert_eq!(state.begin_fetch(""), None);
    assert!(!state.is_loading());
}

#[test]
fn test_duplicate_query_skipped() {
    let mut state = QueryState::new("", 1);
    assert_eq!(state.begin_fetch("a"), Some(1));
    assert_eq!(state.begin_fetch("a"), None);
    assert_eq!(state.begin_fetch("ab"), Some(2));
}

#[test]
fn test_loading_between_dispatch_and_settlement() {
    let mut state = QueryState::new("", 1);
    let id = state.begin_fetch("a").unwrap();
    assert!(state.is_loading());

    let settled = state.settle(id, Ok(vec![Suggestion::new("Apple")]));
    assert_eq!(labels(settled), vec!["Apple"]);
    assert!(!state.is_loading());
}

#[test]
fn test_failure_clears_loading() {
    let mut state = QueryState::new("", 1);
    let id = state.begin_fetch("a").unwrap();

    let settled: Settlement<()> = state.settle(id, Err(FetchError::Network("down".into())));
    assert_eq!(settled, Settlement::Failed);
    assert!(!state.is_loading());
}

#[test]
fn test_older_settlement_is_stale() {
    let mut state = QueryState::new("", 1);
    let first = state.begin_fetch("a").unwrap();
    let second = state.begin_fetch("ab").unwrap();

    // Newer answer lands first
    let settled = state.settle(second, Ok(vec![Suggestion::new("Abba")]));
    assert_eq!(labels(settled), vec!["Abba"]);

    // Older answer arrives late and is dropped
    let late: Settlement<()> = state.settle(first, Ok(vec![Suggestion::new("Apple")]));
    assert_eq!(late, Settlement::Stale);
    assert!(!state.is_loading());
}

#[test]
fn test_older_settlement_does_not_end_loading() {
    let mut state = QueryState::new("", 1);
    let first = state.begin_fetch("a").unwrap();
    let _second = state.begin_fetch("ab").unwrap();

    let late: Settlement<()> = state.settle(first, Ok(Vec::new()));
    assert_eq!(late, Settlement::Stale);
    assert!(state.is_loading());
}

#[test]
fn test_reset_abandons_in_flight_and_forgets_history() {
    let mut state = QueryState::new("", 1);
    let id = state.begin_fetch("a").unwrap();
    state.reset();

    assert!(!state.is_loading());
    let settled: Settlement<()> = state.settle(id, Ok(Vec::new()));
    assert_eq!(settled, Settlement::Stale);

    // Same text is fetched again after a reset
    assert!(state.begin_fetch("a").is_some());
}

/// Global logger recording every message, shared by the tests that inspect logs
struct CapturingLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

fn install_logger() {
    // Only the first call installs; later calls find it in place
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
}

fn warnings_containing(needle: &str) -> usize {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, message)| *level == log::Level::Warn && message.contains(needle))
        .count()
}

#[test]
fn test_failure_of_superseded_lookup_is_logged() {
    install_logger();
    let mut state = QueryState::new("", 1);
    let first = state.begin_fetch("a").unwrap();
    let second = state.begin_fetch("ab").unwrap();

    let late: Settlement<()> =
        state.settle(first, Err(FetchError::Network("superseded-reset".into())));

    assert_eq!(late, Settlement::Stale);
    assert!(state.is_loading());
    assert_eq!(warnings_containing("superseded-reset"), 1);
    assert_eq!(labels(state.settle(second, Ok(vec![Suggestion::new("Abba")]))), vec!["Abba"]);
}

#[test]
fn test_failure_after_reset_is_logged() {
    install_logger();
    let mut state = QueryState::new("", 1);
    let id = state.begin_fetch("a").unwrap();
    state.reset();

    let late: Settlement<()> = state.settle(id, Err(FetchError::Status(502)));

    assert_eq!(late, Settlement::Stale);
    assert!(warnings_containing("Unexpected status 502") >= 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Below the minimum, only the empty query qualifies
    #[test]
    fn prop_min_length_gate(min in 1usize..6, query in "[a-z]{0,8}") {
        let state = QueryState::new("", min);
        let len = query.chars().count();
        prop_assert_eq!(state.qualifies(&query), len == 0 || len >= min);
    }

    // Consecutive identical queries dispatch at most once
    #[test]
    fn prop_consecutive_duplicates_dispatch_once(queries in prop::collection::vec("[ab]{1,2}", 1..20)) {
        let mut state = QueryState::new("", 1);
        let mut previous: Option<String> = None;
        for query in queries {
            let dispatched = state.begin_fetch(&query).is_some();
            prop_assert_eq!(dispatched, previous.as_deref() != Some(query.as_str()));
            previous = Some(query);
        }
    }
}
