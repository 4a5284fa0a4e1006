//! Accepted game word
//!
//! A `Word` can only be built through [`Word::new`], which applies the single
//! acceptance rule shared by dictionary lines and player input.

use super::LetterPool;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// A lowercase word that is playable on a given letter pool
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

/// Why a candidate was not accepted as a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be at least {min} letters, got {0}", min = Word::MIN_LEN)]
    TooShort(usize),
    #[error("comment lines are not words")]
    Comment,
    #[error("word must contain the center letter")]
    MissingCenter,
    #[error("word cannot be spelled from the grid letters")]
    NotSpellable,
}

impl Word {
    /// Minimum number of letters in an accepted word
    pub const MIN_LEN: usize = 4;

    /// Normalize a candidate and check it against the pool
    ///
    /// The candidate is trimmed and lowercased, then accepted only if it is
    /// long enough, is not a `#` comment, contains the pool's center letter
    /// and can be spelled from the pool.
    ///
    /// # Errors
    /// Returns the first rule the candidate breaks, checked in the order above.
    ///
    /// # Examples
    /// ```
    /// use target_game::core::{LetterPool, Word, WordError};
    ///
    /// let pool = LetterPool::new("qazxcvbnn".chars());
    /// assert_eq!(Word::new(" QAZC\n", &pool).unwrap().text(), "qazc");
    /// assert_eq!(Word::new("dfgh", &pool), Err(WordError::MissingCenter));
    /// ```
    pub fn new(candidate: &str, pool: &LetterPool) -> Result<Self, WordError> {
        let text = candidate.trim().to_lowercase();

        let len = text.chars().count();
        if len < Self::MIN_LEN {
            return Err(WordError::TooShort(len));
        }

        if text.starts_with('#') {
            return Err(WordError::Comment);
        }

        if !pool.center().is_some_and(|center| text.contains(center)) {
            return Err(WordError::MissingCenter);
        }

        if !pool.can_spell(&text) {
            return Err(WordError::NotSpellable);
        }

        Ok(Self(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; accepted words have at least [`Word::MIN_LEN`] letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(letters: &str) -> LetterPool {
        LetterPool::new(letters.chars())
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("qazc", &pool("qazxcvbnn")).unwrap();
        assert_eq!(word.text(), "qazc");
        assert_eq!(word.len(), 4);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_normalizes_case_and_whitespace() {
        let word = Word::new("  QCvB \t", &pool("qazxcvbnn")).unwrap();
        assert_eq!(word.text(), "qcvb");
    }

    #[test]
    fn word_creation_too_short() {
        let p = pool("qazxcvbnn");
        assert_eq!(Word::new("qcv", &p), Err(WordError::TooShort(3)));
        assert_eq!(Word::new("", &p), Err(WordError::TooShort(0)));
        assert_eq!(Word::new("   ", &p), Err(WordError::TooShort(0)));
    }

    #[test]
    fn word_creation_comment() {
        assert_eq!(
            Word::new("#qazc", &pool("qazxcvbnn")),
            Err(WordError::Comment)
        );
    }

    #[test]
    fn word_creation_missing_center() {
        // Center letter is 'c'
        assert_eq!(
            Word::new("qazx", &pool("qazxcvbnn")),
            Err(WordError::MissingCenter)
        );
    }

    #[test]
    fn word_creation_not_spellable() {
        // Only one 'c' available
        assert_eq!(
            Word::new("qccv", &pool("qazxcvbnn")),
            Err(WordError::NotSpellable)
        );
        assert_eq!(
            Word::new("fghc", &pool("qazxcvbnn")),
            Err(WordError::NotSpellable)
        );
    }

    #[test]
    fn word_creation_uppercase_pool() {
        let word = Word::new("game", &pool("GAMEMOVER")).unwrap();
        assert_eq!(word.text(), "game");
    }

    #[test]
    fn word_without_center_in_short_pool() {
        assert_eq!(Word::new("abcd", &pool("abcd")), Err(WordError::MissingCenter));
    }

    #[test]
    fn word_error_messages() {
        assert_eq!(
            WordError::TooShort(2).to_string(),
            "word must be at least 4 letters, got 2"
        );
        assert_eq!(
            WordError::MissingCenter.to_string(),
            "word must contain the center letter"
        );
    }

    #[test]
    fn word_display() {
        let word = Word::new("QAZC", &pool("qazxcvbnn")).unwrap();
        assert_eq!(format!("{word}"), "qazc");
    }
}
