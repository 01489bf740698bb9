//! Suggestion list state machine
//!
//! Tracks whether the list is open, which row is highlighted, and the
//! suggestion set itself. Keyboard navigation clamps at both ends rather
//! than wrapping, and never lands on the "no results" row.

use super::suggestion::{Suggestion, SuggestionSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Keys the list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// What a key did to the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// List is closed, key not consumed
    Ignored,
    /// Key consumed; highlight may have moved
    Handled,
    /// Enter on a highlighted row; the owner commits it
    Commit(usize),
    /// Escape closed the list
    Closed,
}

#[derive(Debug, Clone)]
pub struct ListState<V = ()> {
    visibility: Visibility,
    /// Highlighted row (None = no highlight)
    highlighted: Option<usize>,
    suggestions: SuggestionSet<V>,
}

impl<V> Default for ListState<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ListState<V> {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Closed,
            highlighted: None,
            suggestions: SuggestionSet::Empty,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    pub fn open(&mut self) {
        self.visibility = Visibility::Open;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn reset_highlight(&mut self) {
        self.highlighted = None;
    }

    pub fn suggestions(&self) -> &SuggestionSet<V> {
        &self.suggestions
    }

    pub fn highlighted_suggestion(&self) -> Option<&Suggestion<V>> {
        self.highlighted.and_then(|index| self.suggestions.get(index))
    }

    /// Swap in a new suggestion set; the highlight starts over
    pub fn replace(&mut self, suggestions: SuggestionSet<V>) {
        self.suggestions = suggestions;
        self.highlighted = None;
    }

    /// Drop the suggestions, close and reset the highlight
    pub fn clear(&mut self) {
        self.suggestions = SuggestionSet::Empty;
        self.highlighted = None;
        self.visibility = Visibility::Closed;
    }

    /// Move the highlight down, stopping at the last row
    pub fn highlight_next(&mut self) {
        let len = self.suggestions.selectable_len();
        if len == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(current) => (current + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move the highlight up, stopping at the first row
    pub fn highlight_previous(&mut self) {
        let len = self.suggestions.selectable_len();
        if len == 0 {
            return;
        }

        self.highlighted = Some(match self.highlighted {
            Some(current) => current.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    pub fn on_key(&mut self, key: ListKey) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match key {
            ListKey::Down => {
                self.highlight_next();
                KeyOutcome::Handled
            }
            ListKey::Up => {
                self.highlight_previous();
                KeyOutcome::Handled
            }
            ListKey::Enter => match self.highlighted {
                Some(index) if index < self.suggestions.selectable_len() => {
                    KeyOutcome::Commit(index)
                }
                _ => KeyOutcome::Handled,
            },
            ListKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
        }
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod list_state_tests;
