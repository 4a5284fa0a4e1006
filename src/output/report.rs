//! Plain-text result file
//!
//! Written once at the end of a game, overwriting any previous result.

use super::formatters::join_words;
use crate::commands::Reconciliation;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result file written when no other path is given
pub const DEFAULT_RESULT_FILE: &str = "result.txt";

/// Error type for writing the result file
#[derive(Debug, Error)]
#[error("cannot write result file {}", .path.display())]
pub struct ReportError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

/// Render the five labeled result sections
///
/// # Examples
/// ```
/// use target_game::commands::Reconciliation;
/// use target_game::output::report::format_report;
///
/// let report = format_report(&Reconciliation::default());
/// assert!(report.starts_with("Correct words: 0\n"));
/// ```
#[must_use]
pub fn format_report(result: &Reconciliation) -> String {
    format!(
        "Correct words: {}\n\
         Your correct words: {}\n\
         All valid words: {}\n\
         Missed words: {}\n\
         Unrecognized words: {}\n",
        result.correct_count(),
        join_words(&result.good),
        join_words(&result.dictionary),
        join_words(&result.missed),
        join_words(&result.pure),
    )
}

/// Write the result file, replacing any existing one
///
/// # Errors
///
/// Returns `ReportError` if the file cannot be written.
pub fn write_report<P: AsRef<Path>>(path: P, result: &Reconciliation) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, format_report(result)).map_err(|source| ReportError {
        path: path.to_path_buf(),
        source,
    })
}
