//! Grid solving command
//!
//! Lists every dictionary word playable on a grid.

use crate::core::{Grid, Word, WordSet};
use crate::wordlists::{DictionaryError, load_dictionary};
use std::path::Path;

/// Every dictionary word for one grid
pub struct SolveResult {
    pub grid: Grid,
    pub words: WordSet,
    /// Words of the greatest length found, in dictionary order
    pub longest: Vec<Word>,
}

impl SolveResult {
    /// Words sorted longest first, then alphabetically
    #[must_use]
    pub fn by_length(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words
    }
}

/// Find all dictionary words playable on `grid`
///
/// # Errors
///
/// Returns `DictionaryError` if the dictionary cannot be read.
pub fn solve_grid<P: AsRef<Path>>(
    grid: &Grid,
    dictionary: P,
) -> Result<SolveResult, DictionaryError> {
    let words = load_dictionary(dictionary, &grid.pool())?;

    let max_len = words.iter().map(Word::len).max().unwrap_or(0);
    let longest = words
        .iter()
        .filter(|w| w.len() == max_len)
        .cloned()
        .collect();

    Ok(SolveResult {
        grid: *grid,
        words,
        longest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn solve_finds_all_playable_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.txt");
        fs::write(&path, "game\nmover\nmemo\ngrove\nomega\n").unwrap();

        let grid = Grid::from_letters("GAMEMOVER").unwrap();
        let result = solve_grid(&grid, &path).unwrap();

        assert_eq!(result.words.texts(), vec!["game", "mover", "memo", "omega"]);
        let longest: Vec<&str> = result.longest.iter().map(Word::text).collect();
        assert_eq!(longest, vec!["mover", "omega"]);
    }

    #[test]
    fn solve_orders_longest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.txt");
        fs::write(&path, "memo\nomega\ngame\nmover\n").unwrap();

        let grid = Grid::from_letters("GAMEMOVER").unwrap();
        let result = solve_grid(&grid, &path).unwrap();

        let ordered: Vec<&str> = result.by_length().into_iter().map(Word::text).collect();
        assert_eq!(ordered, vec!["mover", "omega", "game", "memo"]);
    }

    #[test]
    fn solve_empty_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.txt");
        fs::write(&path, "# nothing here\n").unwrap();

        let grid = Grid::from_letters("GAMEMOVER").unwrap();
        let result = solve_grid(&grid, &path).unwrap();

        assert!(result.words.is_empty());
        assert!(result.longest.is_empty());
    }

    #[test]
    fn solve_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let grid = Grid::from_letters("GAMEMOVER").unwrap();

        assert!(solve_grid(&grid, dir.path().join("absent.txt")).is_err());
    }
}
