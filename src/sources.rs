//! Ready-made suggestion sources used by the demo binary

pub mod mock;
pub mod scryfall;

pub use mock::{MOCK_DATA, MockSource};
pub use scryfall::ScryfallSource;
