//! Core domain types for the target game
//!
//! Grid, letter pool, the letter-availability matcher and the single word
//! acceptance rule shared by every filter. Everything here is pure and
//! free of I/O.

mod filter;
mod grid;
pub(crate) mod pool;
mod word;
mod word_set;

pub use filter::{FilterStats, WordFilter, filter_words};
pub use grid::{GRID_LETTERS, GRID_SIZE, Grid, GridError};
pub use pool::{CENTER_INDEX, LetterPool, is_good_word};
pub use word::{Word, WordError};
pub use word_set::WordSet;
