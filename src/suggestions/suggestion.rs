//! Suggestion items and the set a lookup produces

/// One suggestion: the text shown to the user plus an optional payload the
/// data source wants handed back on selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion<V = ()> {
    pub label: String,
    pub value: Option<V>,
}

impl<V> Suggestion<V> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<V> From<String> for Suggestion<V> {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl<V> From<&str> for Suggestion<V> {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Result of the latest accepted lookup
///
/// `NoResults` is the "nothing found" marker. It occupies one rendered row
/// but is never highlightable or selectable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionSet<V = ()> {
    /// Nothing fetched yet, or cleared
    Empty,
    /// Non-empty lookup result
    Items(Vec<Suggestion<V>>),
    /// Lookup returned no items
    NoResults,
}

impl<V> Default for SuggestionSet<V> {
    fn default() -> Self {
        SuggestionSet::Empty
    }
}

/// A rendered row of a [`SuggestionSet`]
#[derive(Debug, PartialEq, Eq)]
pub enum Entry<'a, V> {
    Item(&'a Suggestion<V>),
    NoResults,
}

impl<V> SuggestionSet<V> {
    /// Build the set for a settled lookup; an empty result becomes `NoResults`
    pub fn from_results(items: Vec<Suggestion<V>>) -> Self {
        if items.is_empty() {
            SuggestionSet::NoResults
        } else {
            SuggestionSet::Items(items)
        }
    }

    /// Number of rendered rows
    pub fn len(&self) -> usize {
        match self {
            SuggestionSet::Empty => 0,
            SuggestionSet::Items(items) => items.len(),
            SuggestionSet::NoResults => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows that can be highlighted or selected
    pub fn selectable_len(&self) -> usize {
        match self {
            SuggestionSet::Items(items) => items.len(),
            _ => 0,
        }
    }

    pub fn is_no_results(&self) -> bool {
        matches!(self, SuggestionSet::NoResults)
    }

    /// Selectable item at `index`
    pub fn get(&self, index: usize) -> Option<&Suggestion<V>> {
        match self {
            SuggestionSet::Items(items) => items.get(index),
            _ => None,
        }
    }

    /// Rendered row at `row`
    pub fn entry(&self, row: usize) -> Option<Entry<'_, V>> {
        match self {
            SuggestionSet::Items(items) => items.get(row).map(Entry::Item),
            SuggestionSet::NoResults if row == 0 => Some(Entry::NoResults),
            _ => None,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry<'_, V>> {
        (0..self.len()).filter_map(move |row| self.entry(row))
    }

    pub fn labels(&self) -> Vec<&str> {
        match self {
            SuggestionSet::Items(items) => items.iter().map(|s| s.label.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
