//! Tests for Suggestion and SuggestionSet

use super::*;

fn items(labels: &[&str]) -> Vec<Suggestion> {
    labels.iter().map(|l| Suggestion::new(*l)).collect()
}

#[test]
fn test_suggestion_with_value() {
    let suggestion = Suggestion::new("Lightning Bolt").with_value(42u32);
    assert_eq!(suggestion.label(), "Lightning Bolt");
    assert_eq!(suggestion.value, Some(42));
}

#[test]
fn test_suggestion_from_str_has_no_value() {
    let suggestion: Suggestion = "Apple".into();
    assert_eq!(suggestion.label, "Apple");
    assert!(suggestion.value.is_none());
}

#[test]
fn test_default_set_is_empty() {
    let set: SuggestionSet = SuggestionSet::default();
    assert_eq!(set, SuggestionSet::Empty);
    assert!(set.is_empty());
    assert_eq!(set.entries().count(), 0);
}

#[test]
fn test_empty_result_becomes_no_results_marker() {
    let set: SuggestionSet = SuggestionSet::from_results(Vec::new());
    assert!(set.is_no_results());
    assert_eq!(set.len(), 1);
    assert_eq!(set.selectable_len(), 0);
    assert_eq!(set.get(0), None);
    assert_eq!(set.entry(0), Some(Entry::NoResults));
    assert_eq!(set.entry(1), None);
    assert!(set.labels().is_empty());
}

#[test]
fn test_items_are_rows_in_order() {
    let set = SuggestionSet::from_results(items(&["Apple", "Banana", "Cherry"]));
    assert_eq!(set.len(), 3);
    assert_eq!(set.selectable_len(), 3);
    assert_eq!(set.labels(), vec!["Apple", "Banana", "Cherry"]);
    assert_eq!(set.get(1).map(Suggestion::label), Some("Banana"));
    assert!(matches!(set.entry(2), Some(Entry::Item(s)) if s.label == "Cherry"));
    assert_eq!(set.entry(3), None);
}

#[test]
fn test_marker_text_is_not_confused_with_item() {
    // An item that happens to carry the marker text is still a real item
    let set = SuggestionSet::from_results(items(&["No items available"]));
    assert!(!set.is_no_results());
    assert_eq!(set.selectable_len(), 1);
}
