//! Shared word filter
//!
//! Dictionary lines and player tokens go through the same filter, so both
//! sources are held to exactly one acceptance rule.

use super::{LetterPool, Word, WordError, WordSet};

/// Per-reason tally of filtered candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub accepted: usize,
    pub duplicates: usize,
    pub too_short: usize,
    pub comments: usize,
    pub missing_center: usize,
    pub not_spellable: usize,
}

impl FilterStats {
    /// Total candidates offered to the filter
    #[must_use]
    pub const fn total(&self) -> usize {
        self.accepted
            + self.duplicates
            + self.too_short
            + self.comments
            + self.missing_center
            + self.not_spellable
    }

    fn record_rejection(&mut self, error: &WordError) {
        match error {
            WordError::TooShort(_) => self.too_short += 1,
            WordError::Comment => self.comments += 1,
            WordError::MissingCenter => self.missing_center += 1,
            WordError::NotSpellable => self.not_spellable += 1,
        }
    }
}

/// Accumulates accepted words for one letter pool
#[derive(Debug, Clone)]
pub struct WordFilter<'a> {
    pool: &'a LetterPool,
    words: WordSet,
    stats: FilterStats,
}

impl<'a> WordFilter<'a> {
    #[must_use]
    pub fn new(pool: &'a LetterPool) -> Self {
        Self {
            pool,
            words: WordSet::new(),
            stats: FilterStats::default(),
        }
    }

    /// Offer one candidate; returns true if it was newly accepted
    pub fn offer(&mut self, candidate: &str) -> bool {
        match Word::new(candidate, self.pool) {
            Ok(word) => {
                if self.words.insert(word) {
                    self.stats.accepted += 1;
                    true
                } else {
                    self.stats.duplicates += 1;
                    false
                }
            }
            Err(error) => {
                self.stats.record_rejection(&error);
                false
            }
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &FilterStats {
        &self.stats
    }

    /// Finish filtering, returning the accepted words
    #[must_use]
    pub fn finish(self) -> (WordSet, FilterStats) {
        (self.words, self.stats)
    }
}

/// Filter candidates down to the words playable on `pool`
///
/// # Examples
/// ```
/// use target_game::core::{LetterPool, filter_words};
///
/// let pool = LetterPool::new("qazxcvbnn".chars());
/// let words = filter_words(["qazc", "qcvb", "dfgh", "fghj"], &pool);
/// assert_eq!(words.texts(), vec!["qazc", "qcvb"]);
/// ```
pub fn filter_words<I, S>(candidates: I, pool: &LetterPool) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filter = WordFilter::new(pool);
    for candidate in candidates {
        filter.offer(candidate.as_ref());
    }
    filter.finish().0
}
