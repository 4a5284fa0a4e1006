//! Word list loading utilities
//!
//! Streams a dictionary file or the player's input through the shared word
//! filter for one letter pool.

use crate::core::{FilterStats, LetterPool, WordFilter, WordSet, filter_words};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Lines scanned between spinner updates
const PROGRESS_INTERVAL: u64 = 4096;

/// Error type for dictionary loading
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot open dictionary {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read dictionary {} at line {line}", .path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Load the dictionary words playable on `pool`
///
/// Each line is trimmed and lowercased, then accepted only if it passes the
/// shared word rule. Lines starting with `#` are comments.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be opened, or if any line
/// cannot be read (including invalid UTF-8).
///
/// # Examples
/// ```no_run
/// use target_game::core::Grid;
/// use target_game::wordlists::loader::load_dictionary;
///
/// let grid = Grid::from_letters("GAMEXYZWQ").unwrap();
/// let words = load_dictionary("en.txt", &grid.pool()).unwrap();
/// println!("{} playable words", words.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    pool: &LetterPool,
) -> Result<WordSet, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let spinner = scan_spinner(path);
    let result = filter_lines(BufReader::new(file), pool, &spinner).map_err(|(line, source)| {
        DictionaryError::Read {
            path: path.to_path_buf(),
            line,
            source,
        }
    });
    spinner.finish_and_clear();

    let (words, stats) = result?;
    log_stats(path, &stats);
    if words.is_empty() {
        warn!(
            "no dictionary word in {} is playable on letters {pool}",
            path.display()
        );
    }

    Ok(words)
}

/// Filter newline-delimited words from any reader
///
/// On failure returns the 1-based line number that could not be read.
fn filter_lines<R: BufRead>(
    reader: R,
    pool: &LetterPool,
    spinner: &ProgressBar,
) -> Result<(WordSet, FilterStats), (usize, io::Error)> {
    let mut filter = WordFilter::new(pool);

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| (index + 1, e))?;
        filter.offer(&line);

        if (index as u64 + 1) % PROGRESS_INTERVAL == 0 {
            spinner.set_position(index as u64 + 1);
        }
    }

    Ok(filter.finish())
}

fn scan_spinner(path: &Path) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} scanning {msg}: {pos} lines")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(path.display().to_string());
    spinner
}

fn log_stats(path: &Path, stats: &FilterStats) {
    debug!(
        "{}: {} lines, {} accepted, {} duplicate, {} too short, {} comment, \
         {} without center letter, {} not spellable",
        path.display(),
        stats.total(),
        stats.accepted,
        stats.duplicates,
        stats.too_short,
        stats.comments,
        stats.missing_center,
        stats.not_spellable,
    );
}

/// Read every whitespace-separated token until end of input
///
/// Tokens are lowercased; no other filtering is applied.
///
/// # Errors
///
/// Returns an I/O error if the reader fails.
pub fn read_user_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_lowercase));
    }
    Ok(words)
}

/// Narrow raw player tokens to the words playable on `pool`
#[must_use]
pub fn filter_user_words(tokens: &[String], pool: &LetterPool) -> WordSet {
    let words = filter_words(tokens, pool);
    debug!(
        "{} of {} entered tokens are playable",
        words.len(),
        tokens.len()
    );
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, Word};
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn dictionary_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    fn pool(letters: &str) -> LetterPool {
        LetterPool::new(letters.chars())
    }

    #[test]
    fn load_dictionary_filters_lines() {
        let file = dictionary_file(b"# comment qazc\nqazc\nQCVB\n  qazc  \nqc\n\ndfgh\nqccv\n");
        let words = load_dictionary(file.path(), &pool("qazxcvbnn")).unwrap();

        assert_eq!(words.texts(), vec!["qazc", "qcvb"]);
    }

    #[test]
    fn load_dictionary_handles_crlf_and_missing_final_newline() {
        let file = dictionary_file(b"qazc\r\nqcvb");
        let words = load_dictionary(file.path(), &pool("qazxcvbnn")).unwrap();

        assert_eq!(words.texts(), vec!["qazc", "qcvb"]);
    }

    #[test]
    fn load_dictionary_is_idempotent() {
        let file = dictionary_file(b"qazc\nqcvb\nbanc\nnanc\n");
        let letters = pool("qazxcvbnn");

        let first = load_dictionary(file.path(), &letters).unwrap();
        let second = load_dictionary(file.path(), &letters).unwrap();

        assert_eq!(first, second);
        assert_eq!(letters, pool("qazxcvbnn"));
    }

    #[test]
    fn load_dictionary_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("en.txt");

        let err = load_dictionary(&missing, &pool("qazxcvbnn")).unwrap_err();
        assert!(matches!(err, DictionaryError::Open { .. }));
        assert!(err.to_string().contains("en.txt"));
    }

    #[test]
    fn load_dictionary_rejects_invalid_utf8() {
        let file = dictionary_file(b"qazc\n\xff\xfe\n");
        let err = load_dictionary(file.path(), &pool("qazxcvbnn")).unwrap_err();

        assert!(matches!(err, DictionaryError::Read { line: 2, .. }));
    }

    #[test]
    fn rare_center_letter_gives_empty_dictionary() {
        let grid = Grid::from_rows([['G', 'A', 'M'], ['E', 'X', 'Y'], ['Z', 'W', 'Q']]).unwrap();
        let file = dictionary_file(b"game\nmega\ngamey\n");

        let words = load_dictionary(file.path(), &grid.pool()).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn dictionary_words_satisfy_rules() {
        let letters = pool("gamemover");
        let file = dictionary_file(b"game\nmover\ngrove\nmemo\nmeme\nomega\n#emo\nem\n");

        let words = load_dictionary(file.path(), &letters).unwrap();
        assert!(!words.is_empty());
        for word in &words {
            assert!(word.len() >= Word::MIN_LEN);
            assert!(word.text().contains('m'));
            assert!(letters.can_spell(word.text()));
        }
    }

    #[test]
    fn read_user_words_splits_and_lowercases() {
        let input = Cursor::new("Game  MOVER\n\n\tgrove memo\n");
        let words = read_user_words(input).unwrap();

        assert_eq!(words, vec!["game", "mover", "grove", "memo"]);
    }

    #[test]
    fn read_user_words_empty_input() {
        let words = read_user_words(Cursor::new("")).unwrap();
        assert!(words.is_empty());
    }

    #[test]
    fn filter_user_words_matches_example() {
        let tokens: Vec<String> = ["qazc", "qcvb", "dfgh", "fghj"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let words = filter_user_words(&tokens, &pool("qazxcvbnn"));
        assert_eq!(words.texts(), vec!["qazc", "qcvb"]);
    }
}
