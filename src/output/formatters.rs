//! Formatting utilities for terminal output

use crate::core::WordSet;

/// Join words with `", "` in set order
#[must_use]
pub fn join_words(words: &WordSet) -> String {
    words.texts().join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `1 word`, `2 words`
#[must_use]
pub fn count_words(count: usize) -> String {
    if count == 1 {
        "1 word".to_string()
    } else {
        format!("{count} words")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterPool, filter_words};

    #[test]
    fn join_words_uses_comma_space() {
        let pool = LetterPool::new("gamemover".chars());
        let words = filter_words(["game", "mover", "memo"], &pool);
        assert_eq!(join_words(&words), "game, mover, memo");
        assert_eq!(join_words(&WordSet::new()), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(3.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn count_words_pluralizes() {
        assert_eq!(count_words(0), "0 words");
        assert_eq!(count_words(1), "1 word");
        assert_eq!(count_words(12), "12 words");
    }
}
