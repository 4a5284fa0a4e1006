//! Word sources for the game
//!
//! The dictionary comes from a newline-delimited file; player words come from
//! any buffered reader. Both are narrowed by the same word filter.

pub mod loader;

pub use loader::{DictionaryError, filter_user_words, load_dictionary, read_user_words};

/// Dictionary file read when no other path is given
pub const DEFAULT_DICTIONARY: &str = "en.txt";
