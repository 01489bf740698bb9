//! Query controller
//!
//! Owns the query text and decides which debounced queries turn into
//! fetches. Identical consecutive queries are fetched once, and every
//! dispatched fetch gets a request id so that only the latest settlement is
//! applied; a slower answer for an older query is dropped.

use super::source::FetchResult;
use crate::suggestions::Suggestion;

pub type RequestId = u64;

/// What to do with a settled fetch
#[derive(Debug, PartialEq, Eq)]
pub enum Settlement<V> {
    /// Latest request succeeded; replace the suggestions
    Resolved(Vec<Suggestion<V>>),
    /// Latest request failed; keep the suggestions as they are
    Failed,
    /// Superseded or abandoned request; ignore
    Stale,
}

#[derive(Debug, Clone)]
pub struct QueryState {
    text: String,
    min_query_length: usize,
    /// Most recent query a fetch was dispatched for. Starts out empty, so the
    /// empty query alone never fetches.
    last_accepted: String,
    /// Incremented for each dispatched fetch
    request_id: RequestId,
    /// Request whose settlement is still awaited
    in_flight: Option<RequestId>,
}

impl QueryState {
    pub fn new(initial: impl Into<String>, min_query_length: usize) -> Self {
        Self {
            text: initial.into(),
            min_query_length,
            last_accepted: String::new(),
            request_id: 0,
            in_flight: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without considering a lookup (selection, clear)
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether `query` may be looked up: empty, or at least
    /// `min_query_length` characters
    pub fn qualifies(&self, query: &str) -> bool {
        let len = query.chars().count();
        len == 0 || len >= self.min_query_length
    }

    /// Record a user edit. Returns true if a debounced lookup should be armed.
    pub fn on_query_change(&mut self, new_query: impl Into<String>) -> bool {
        self.text = new_query.into();
        self.qualifies(&self.text)
    }

    /// Start a fetch for a debounced `query`
    ///
    /// Returns `None` when `query` is the one most recently dispatched.
    pub fn begin_fetch(&mut self, query: &str) -> Option<RequestId> {
        if query == self.last_accepted {
            log::debug!("Skipping duplicate lookup for {:?}", query);
            return None;
        }

        self.last_accepted = query.to_string();
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight = Some(self.request_id);
        log::debug!("Dispatching lookup {} for {:?}", self.request_id, query);
        Some(self.request_id)
    }

    /// Apply the outcome of fetch `request_id`
    pub fn settle<V>(&mut self, request_id: RequestId, result: FetchResult<V>) -> Settlement<V> {
        if self.in_flight != Some(request_id) {
            match &result {
                Err(e) => log::warn!(
                    "Error fetching suggestions (superseded lookup {}): {}",
                    request_id,
                    e
                ),
                Ok(_) => log::debug!(
                    "Ignoring stale lookup {} (current: {:?})",
                    request_id,
                    self.in_flight
                ),
            }
            return Settlement::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(items) => Settlement::Resolved(items),
            Err(e) => {
                log::warn!("Error fetching suggestions: {}", e);
                Settlement::Failed
            }
        }
    }

    /// True strictly between dispatch and settlement of the latest fetch
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_accepted(&self) -> &str {
        &self.last_accepted
    }

    /// Forget the dispatch history and abandon the in-flight fetch
    ///
    /// After a reset the next non-empty query fetches again even if it
    /// matches the last dispatched one.
    pub fn reset(&mut self) {
        self.last_accepted.clear();
        self.in_flight = None;
    }
}

#[cfg(test)]
#[path = "query_state_tests.rs"]
mod query_state_tests;
