//! Scoring player words against the dictionary

use crate::core::WordSet;

/// Outcome of scoring one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Player words that are in the dictionary
    pub good: WordSet,
    /// Player words that are well-formed but not in the dictionary
    pub pure: WordSet,
    /// Dictionary words the player did not find
    pub missed: WordSet,
    /// Every dictionary word playable on the grid
    pub dictionary: WordSet,
}

impl Reconciliation {
    /// Number of correct player words
    #[inline]
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.good.len()
    }

    /// Share of the dictionary the player found, 0.0 to 1.0
    #[must_use]
    pub fn found_ratio(&self) -> f64 {
        if self.dictionary.is_empty() {
            0.0
        } else {
            self.good.len() as f64 / self.dictionary.len() as f64
        }
    }
}

/// Score filtered player words against the dictionary
///
/// `good` and `pure` follow player order; `missed` follows dictionary order.
///
/// # Examples
/// ```
/// use target_game::commands::reconcile;
/// use target_game::core::{LetterPool, filter_words};
///
/// let pool = LetterPool::new("gamemover".chars());
/// let dictionary = filter_words(["game", "memo", "mover"], &pool);
/// let user = filter_words(["memo", "mome"], &pool);
///
/// let result = reconcile(&user, &dictionary);
/// assert_eq!(result.good.texts(), vec!["memo"]);
/// assert_eq!(result.pure.texts(), vec!["mome"]);
/// assert_eq!(result.missed.texts(), vec!["game", "mover"]);
/// ```
#[must_use]
pub fn reconcile(user_words: &WordSet, dictionary: &WordSet) -> Reconciliation {
    let good = user_words.intersection(dictionary);
    let pure = user_words.difference(dictionary);
    let missed = dictionary.difference(&good);

    Reconciliation {
        good,
        pure,
        missed,
        dictionary: dictionary.clone(),
    }
}
