//! Insertion-ordered set of unique words

use super::Word;
use rustc_hash::FxHashSet;

/// Unique words in first-seen order
///
/// Iteration order is the order of first insertion, so results built from
/// a deterministic input are deterministic too.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, returning false if it was already present
    pub fn insert(&mut self, word: Word) -> bool {
        if self.index.contains(&word) {
            return false;
        }
        self.index.insert(word.clone());
        self.words.push(word);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Word texts in insertion order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    /// Words of `self` that are also in `other`, in `self` order
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.iter()
            .filter(|word| other.contains(word.text()))
            .cloned()
            .collect()
    }

    /// Words of `self` that are not in `other`, in `self` order
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.iter()
            .filter(|word| !other.contains(word.text()))
            .cloned()
            .collect()
    }

    /// Whether every word of `self` is in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|word| other.contains(word.text()))
    }

    /// Same members, regardless of order
    #[must_use]
    pub fn same_words(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl PartialEq for WordSet {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl Eq for WordSet {}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Word> for WordSet {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl IntoIterator for WordSet {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPool;

    fn set(words: &[&str]) -> WordSet {
        let pool = LetterPool::new("abcdefghi".chars());
        words
            .iter()
            .map(|w| Word::new(w, &pool).unwrap())
            .collect()
    }

    #[test]
    fn insert_keeps_first_seen_order() {
        let words = set(&["head", "bead", "face", "head"]);
        assert_eq!(words.texts(), vec!["head", "bead", "face"]);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn insert_reports_duplicates() {
        let pool = LetterPool::new("abcdefghi".chars());
        let mut words = WordSet::new();
        assert!(words.insert(Word::new("cage", &pool).unwrap()));
        assert!(!words.insert(Word::new("CAGE", &pool).unwrap()));
        assert!(words.contains("cage"));
        assert!(!words.contains("face"));
    }

    #[test]
    fn intersection_and_difference_follow_left_order() {
        let left = set(&["face", "head", "bead", "cage"]);
        let right = set(&["cage", "face"]);

        assert_eq!(left.intersection(&right).texts(), vec!["face", "cage"]);
        assert_eq!(left.difference(&right).texts(), vec!["head", "bead"]);
    }

    #[test]
    fn subset_and_same_words() {
        let left = set(&["face", "cage"]);
        let right = set(&["cage", "face", "head"]);

        assert!(left.is_subset(&right));
        assert!(!right.is_subset(&left));
        assert!(left.same_words(&set(&["cage", "face"])));
        assert_ne!(left, set(&["cage", "face"]));
    }

    #[test]
    fn empty_set_operations() {
        let empty = WordSet::new();
        let words = set(&["face"]);

        assert!(empty.is_empty());
        assert!(empty.intersection(&words).is_empty());
        assert!(empty.is_subset(&words));
        assert_eq!(words.difference(&empty), words);
    }
}
