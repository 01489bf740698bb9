mod highlight;
mod list_state;
mod suggestion;

pub use highlight::{Highlighter, Segment};
pub use list_state::{KeyOutcome, ListKey, ListState};
pub use suggestion::{Entry, Suggestion, SuggestionSet};
