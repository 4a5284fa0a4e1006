//! The 3x3 letter grid
//!
//! A grid is generated once per game and never mutated. Flattening it in
//! row-major order gives the letter pool every filter works against.

use super::LetterPool;
use super::pool::CENTER_INDEX;
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Rows and columns in a grid
pub const GRID_SIZE: usize = 3;

/// Letters in a grid
pub const GRID_LETTERS: usize = GRID_SIZE * GRID_SIZE;

/// 3x3 table of uppercase ASCII letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [[char; GRID_SIZE]; GRID_SIZE],
}

/// Error type for invalid grid input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid needs exactly {expected} letters, got {0}", expected = GRID_LETTERS)]
    InvalidLength(usize),
    #[error("grid letters must be A-Z, got {0:?}")]
    InvalidLetter(char),
}

impl Grid {
    /// Generate a grid of independently drawn letters
    ///
    /// Each cell is uniform over A-Z and repeats are allowed. The caller owns
    /// the random source, so a seeded generator gives a reproducible grid.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use target_game::core::Grid;
    ///
    /// let a = Grid::generate(&mut StdRng::seed_from_u64(7));
    /// let b = Grid::generate(&mut StdRng::seed_from_u64(7));
    /// assert_eq!(a, b);
    /// ```
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut rows = [['A'; GRID_SIZE]; GRID_SIZE];
        for row in &mut rows {
            for cell in row.iter_mut() {
                *cell = char::from(rng.random_range(b'A'..=b'Z'));
            }
        }
        Self { rows }
    }

    /// Build a grid from explicit rows
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` for any cell that is not an ASCII letter.
    pub fn from_rows(rows: [[char; GRID_SIZE]; GRID_SIZE]) -> Result<Self, GridError> {
        let mut normalized = rows;
        for cell in normalized.iter_mut().flatten() {
            if !cell.is_ascii_alphabetic() {
                return Err(GridError::InvalidLetter(*cell));
            }
            *cell = cell.to_ascii_uppercase();
        }
        Ok(Self { rows: normalized })
    }

    /// Build a grid from nine letters in row-major order
    ///
    /// # Errors
    /// Returns `GridError` if the input is not exactly nine ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use target_game::core::Grid;
    ///
    /// let grid = Grid::from_letters("gamexyzwq").unwrap();
    /// assert_eq!(grid.center(), 'X');
    /// assert!(Grid::from_letters("short").is_err());
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, GridError> {
        let chars: Vec<char> = letters.trim().chars().collect();
        if chars.len() != GRID_LETTERS {
            return Err(GridError::InvalidLength(chars.len()));
        }

        let mut rows = [['A'; GRID_SIZE]; GRID_SIZE];
        for (i, &ch) in chars.iter().enumerate() {
            rows[i / GRID_SIZE][i % GRID_SIZE] = ch;
        }
        Self::from_rows(rows)
    }

    /// Grid rows, top to bottom
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Flatten the grid in row-major order
    #[must_use]
    pub fn letters(&self) -> [char; GRID_LETTERS] {
        let mut letters = ['A'; GRID_LETTERS];
        for (slot, &cell) in letters.iter_mut().zip(self.rows.iter().flatten()) {
            *slot = cell;
        }
        letters
    }

    /// The center letter, flattened index 4
    #[inline]
    #[must_use]
    pub fn center(&self) -> char {
        self.letters()[CENTER_INDEX]
    }

    /// Letter pool for filtering words against this grid
    #[must_use]
    pub fn pool(&self) -> LetterPool {
        LetterPool::new(self.letters())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_letters(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
