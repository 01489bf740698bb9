//! In-memory source with simulated latency

use std::time::Duration;

use futures::future::BoxFuture;
use tokio_util::sync::CancellationToken;

use crate::query::{FetchError, FetchResult, SuggestionSource};
use crate::suggestions::Suggestion;

pub const MOCK_DATA: &[&str] = &[
    "Apple",
    "Apricot",
    "Avocado",
    "Banana",
    "Blackberry",
    "Blueberry",
    "Cherry",
    "Coconut",
    "Cranberry",
    "Date",
    "Dragonfruit",
    "Elderberry",
    "Fig",
    "Grape",
    "Grapefruit",
    "Guava",
    "Kiwi",
    "Lemon",
    "Lime",
    "Lychee",
    "Mango",
    "Nectarine",
    "Orange",
    "Papaya",
    "Passion Fruit",
    "Peach",
    "Pear",
    "Pineapple",
    "Plum",
    "Pomegranate",
    "Raspberry",
    "Strawberry",
    "Tangerine",
    "Watermelon",
];

/// Case-insensitive substring search over a fixed list
#[derive(Debug, Clone)]
pub struct MockSource {
    items: Vec<String>,
    delay: Duration,
    cancel_token: CancellationToken,
}

impl MockSource {
    pub fn new(delay: Duration) -> Self {
        Self::with_items(MOCK_DATA.iter().map(|item| item.to_string()).collect(), delay)
    }

    pub fn with_items(items: Vec<String>, delay: Duration) -> Self {
        Self {
            items,
            delay,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Items containing `query`, ignoring case, in list order
    pub fn filter(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Fail every pending and future lookup with [`FetchError::Cancelled`]
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::SourceConfig::default().mock_delay_ms))
    }
}

impl SuggestionSource for MockSource {
    type Value = ();

    fn fetch(&self, query: &str) -> BoxFuture<'static, FetchResult<()>> {
        let matches = self.filter(query);
        let delay = self.delay;
        let cancel_token = self.cancel_token.clone();

        Box::pin(async move {
            tokio::select! {
                biased;
                _ = cancel_token.cancelled() => Err(FetchError::Cancelled),
                _ = tokio::time::sleep(delay) => {
                    Ok(matches.into_iter().map(Suggestion::new).collect())
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod mock_tests;
