//! One game from start to result file
//!
//! Shows the grid, reads the player's words until end of input, scores them
//! against the dictionary and writes the result file.

use super::reconcile::{Reconciliation, reconcile};
use crate::core::Grid;
use crate::output::display::{clear_screen, write_grid, write_score, write_word_line};
use crate::output::report::{DEFAULT_RESULT_FILE, ReportError, write_report};
use crate::wordlists::{
    DEFAULT_DICTIONARY, DictionaryError, filter_user_words, load_dictionary, read_user_words,
};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Where a session reads its dictionary and writes its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub dictionary: PathBuf,
    pub result: PathBuf,
    pub clear_screen: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            result: PathBuf::from(DEFAULT_RESULT_FILE),
            clear_screen: true,
        }
    }
}

/// Error type for a game session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read player words")]
    Input(#[source] io::Error),
    #[error("failed to write to the terminal")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Run one game on `grid`
///
/// The dictionary is only read after input ends; if it cannot be read the
/// session fails and no result file is written.
///
/// # Errors
///
/// Returns `SessionError` if reading input, loading the dictionary, writing
/// to `out` or writing the result file fails.
pub fn run_session<R: BufRead, W: Write>(
    config: &SessionConfig,
    grid: &Grid,
    input: R,
    out: &mut W,
) -> Result<Reconciliation, SessionError> {
    if config.clear_screen {
        clear_screen(out)?;
    }

    write_grid(out, grid)?;
    writeln!(
        out,
        "\nEnter words separated by spaces or new lines. \
         Finish with Ctrl-D (Ctrl-Z then Enter on Windows)."
    )?;
    out.flush()?;

    let tokens = read_user_words(input).map_err(SessionError::Input)?;
    info!("read {} tokens from the player", tokens.len());

    let pool = grid.pool();
    let dictionary = load_dictionary(&config.dictionary, &pool)?;
    let user_words = filter_user_words(&tokens, &pool);
    let reconciliation = reconcile(&user_words, &dictionary);

    writeln!(out)?;
    write_word_line(out, "All valid words", &reconciliation.dictionary)?;
    write_word_line(out, "Words not in the dictionary", &reconciliation.pure)?;
    write_word_line(out, "Your correct words", &reconciliation.good)?;
    write_score(out, &reconciliation)?;

    write_report(&config.result, &reconciliation)?;
    info!(
        "{} of {} words found, result written to {}",
        reconciliation.correct_count(),
        reconciliation.dictionary.len(),
        config.result.display()
    );

    Ok(reconciliation)
}
