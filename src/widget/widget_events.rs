use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::widget_state::Autocomplete;
use crate::query::SuggestionSource;
use crate::suggestions::{KeyOutcome, ListKey};

impl<S: SuggestionSource> Autocomplete<S> {
    /// Handle a key press aimed at the input
    ///
    /// Arrow keys, Enter and Esc drive the list while it is open. Printable
    /// characters and Backspace edit the query at its end; Ctrl+U clears.
    /// Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_mounted() || key.kind == KeyEventKind::Release {
            return false;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.clear();
                    true
                }
                _ => false,
            };
        }

        match key.code {
            KeyCode::Down => self.handle_list_key(ListKey::Down),
            KeyCode::Up => self.handle_list_key(ListKey::Up),
            KeyCode::Enter => self.handle_list_key(ListKey::Enter),
            KeyCode::Esc => self.handle_list_key(ListKey::Escape),
            KeyCode::Char(c) => {
                let mut text = self.query().to_string();
                text.push(c);
                self.set_query(text);
                true
            }
            KeyCode::Backspace => {
                let mut text = self.query().to_string();
                if text.pop().is_some() {
                    self.set_query(text);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_list_key(&mut self, key: ListKey) -> bool {
        match self.list.on_key(key) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Handled | KeyOutcome::Closed => true,
            KeyOutcome::Commit(_) => {
                if let Some(suggestion) = self.list.highlighted_suggestion().cloned() {
                    self.select(suggestion);
                }
                true
            }
        }
    }
}

#[cfg(test)]
#[path = "widget_events_tests.rs"]
mod widget_events_tests;
