//! Target word game
//!
//! A 3x3 grid of random letters hides a set of dictionary words. Every word
//! has at least four letters, uses the center letter and spends each grid
//! letter at most once. Player words are scored against that set.
//!
//! # Quick Start
//!
//! ```rust
//! use target_game::commands::reconcile;
//! use target_game::core::{Grid, filter_words};
//!
//! let grid = Grid::from_letters("GAMEMOVER").unwrap();
//! let pool = grid.pool();
//!
//! let dictionary = filter_words(["game", "mover", "memo"], &pool);
//! let typed = filter_words(["memo", "mome"], &pool);
//!
//! let result = reconcile(&typed, &dictionary);
//! assert_eq!(result.correct_count(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary and player word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and result file
pub mod output;

// Interactive TUI interface
pub mod interactive;
