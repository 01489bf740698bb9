// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_ARIA_LABEL: &str = "autocomplete";
pub const DEFAULT_NO_SUGGESTIONS_TEXT: &str = "No items available";
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 1;
pub const DEFAULT_MOCK_DELAY_MS: u64 = 300;
pub const SCRYFALL_AUTOCOMPLETE_URL: &str = "https://api.scryfall.com/cards/autocomplete";

/// Options recognised by the autocomplete widget
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Text shown while the query is empty
    pub placeholder: String,
    /// Quiet period before a lookup is dispatched
    pub debounce_delay_ms: u64,
    /// Non-empty queries shorter than this (in characters) never fetch
    pub min_query_length: usize,
    /// Accessible label for the input
    pub aria_label: String,
    /// Initial query text
    pub default_value: String,
    /// Text of the row shown when a lookup returns nothing
    pub no_suggestions_text: String,
    /// Empty the input after a successful selection
    pub clear_on_select: bool,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            default_value: String::new(),
            no_suggestions_text: DEFAULT_NO_SUGGESTIONS_TEXT.to_string(),
            clear_on_select: false,
        }
    }
}

impl AutocompleteConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_debounce_delay_ms(mut self, delay_ms: u64) -> Self {
        self.debounce_delay_ms = delay_ms;
        self
    }

    pub fn with_min_query_length(mut self, min_query_length: usize) -> Self {
        self.min_query_length = min_query_length;
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = default_value.into();
        self
    }

    pub fn with_no_suggestions_text(mut self, text: impl Into<String>) -> Self {
        self.no_suggestions_text = text.into();
        self
    }

    pub fn with_clear_on_select(mut self, clear_on_select: bool) -> Self {
        self.clear_on_select = clear_on_select;
        self
    }
}

/// Demo data source selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    Scryfall,
}

/// Demo data source section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Simulated latency of the in-memory source
    pub mock_delay_ms: u64,
    pub scryfall_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            kind: SourceKind::Mock,
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
            scryfall_url: SCRYFALL_AUTOCOMPLETE_URL.to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub source: SourceConfig,
}
