//! Debounced, cancellable autocomplete input widget.
//!
//! [`widget::Autocomplete`] turns keystrokes into debounced lookups against a
//! caller-supplied [`query::SuggestionSource`] and keeps a navigable
//! suggestion list consistent while fetches overlap. All state changes happen
//! on the widget's own event queue, drained with
//! [`widget::Autocomplete::pump`] or [`widget::Autocomplete::process_next`].

pub mod config;
pub mod debouncer;
pub mod error;
pub mod query;
pub mod sources;
pub mod suggestions;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use config::{AutocompleteConfig, Config};
pub use error::{ConfigError, TypeaheadError};
pub use query::{FetchError, SuggestionSource};
pub use suggestions::{Suggestion, SuggestionSet};
pub use widget::{Autocomplete, SelectEvent};
