//! Word check command
//!
//! Explains whether a single word is accepted on a grid.

use crate::core::{Grid, Word, WordError, WordSet};

/// Verdict for one candidate word
pub struct CheckResult {
    pub word: String,
    pub verdict: Result<Word, WordError>,
    /// Letters the grid cannot supply; empty unless the word is not spellable
    pub missing_letters: Vec<char>,
    pub in_dictionary: bool,
}

impl CheckResult {
    /// Accepted on the grid and present in the dictionary
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.verdict.is_ok() && self.in_dictionary
    }
}

/// Check `candidate` against the grid rules and the dictionary
#[must_use]
pub fn check_word(candidate: &str, grid: &Grid, dictionary: &WordSet) -> CheckResult {
    let pool = grid.pool();
    let verdict = Word::new(candidate, &pool);

    let missing_letters = match verdict {
        Err(WordError::NotSpellable) => pool.missing_letters(candidate.trim()),
        _ => Vec::new(),
    };
    let in_dictionary = verdict
        .as_ref()
        .is_ok_and(|word| dictionary.contains(word.text()));

    CheckResult {
        word: candidate.trim().to_lowercase(),
        verdict,
        missing_letters,
        in_dictionary,
    }
}
