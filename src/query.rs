pub mod query_state;
pub mod source;

// Re-export public types
pub use query_state::{QueryState, RequestId, Settlement};
pub use source::{FetchError, FetchResult, FnSource, SuggestionSource, source_fn};
