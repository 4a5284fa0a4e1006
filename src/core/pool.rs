//! Letter pool and the letter-availability matcher
//!
//! The pool is the flattened grid, normalized to lowercase once at construction.
//! Matching treats it as a multiset: each pool letter can be spent at most once.

use rustc_hash::FxHashMap;
use std::fmt;

/// Index of the center letter inside a flattened 3x3 grid
pub const CENTER_INDEX: usize = 4;

/// Flattened, lowercase letter sequence of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Create a pool from letters in grid order
    ///
    /// Letters are lowercased so every later comparison is single-case.
    ///
    /// # Examples
    /// ```
    /// use target_game::core::LetterPool;
    ///
    /// let pool = LetterPool::new("GAMEXYZWQ".chars());
    /// assert_eq!(pool.center(), Some('x'));
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters
                .into_iter()
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }

    /// Pool letters in grid order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the pool
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the pool holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letter every accepted word must contain
    ///
    /// Always the flattened index 4, never a geometric center. Pools with
    /// fewer than five letters have no center.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Option<char> {
        self.letters.get(CENTER_INDEX).copied()
    }

    /// Whether `word` can be spelled from this pool
    #[inline]
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        is_good_word(word, &self.letters)
    }

    /// Letters of `word` that the pool cannot supply, in word order
    ///
    /// Empty exactly when [`can_spell`](Self::can_spell) is true.
    #[must_use]
    pub fn missing_letters(&self, word: &str) -> Vec<char> {
        let mut available = letter_counts(&self.letters);
        word.chars()
            .flat_map(char::to_lowercase)
            .filter(|ch| match available.get_mut(ch) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    false
                }
                _ => true,
            })
            .collect()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

/// Check whether a word is formed from the letters in the game
///
/// Every character of `word` must be matched by a distinct letter of `letters`:
/// for each character `c`, `count(c in word) <= count(c in letters)`.
/// Comparison is case-insensitive on both sides.
///
/// # Examples
/// ```
/// use target_game::core::is_good_word;
///
/// let letters: Vec<char> = "gamemover".chars().collect();
/// assert!(is_good_word("game", &letters));
/// assert!(!is_good_word("gamma", &letters));
/// ```
#[must_use]
pub fn is_good_word(word: &str, letters: &[char]) -> bool {
    let mut available = letter_counts(letters);

    word.chars()
        .flat_map(char::to_lowercase)
        .all(|ch| match available.get_mut(&ch) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
}

fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in letters.iter().flat_map(|c| c.to_lowercase()) {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
