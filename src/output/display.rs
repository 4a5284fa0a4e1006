//! Display functions for the game and command results

use super::formatters::{count_words, create_progress_bar, join_words};
use crate::commands::{CheckResult, Reconciliation, SolveResult};
use crate::core::{CENTER_INDEX, GRID_LETTERS, GRID_SIZE, Grid, Word, WordSet};
use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Clear the terminal and move the cursor home
///
/// # Errors
///
/// Returns an error if the terminal cannot be written.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Draw the grid in a box, center letter highlighted
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    writeln!(out, "{}", "╔═══════════╗".cyan())?;
    for (r, row) in grid.rows().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, letter)| {
                if r * GRID_SIZE + c == CENTER_INDEX {
                    letter.to_string().bright_yellow().bold().to_string()
                } else {
                    letter.to_string()
                }
            })
            .collect();
        writeln!(out, "{}  {}  {}", "║".cyan(), cells.join("  "), "║".cyan())?;
    }
    writeln!(out, "{}", "╚═══════════╝".cyan())?;
    writeln!(
        out,
        "Every word needs {} letters and must use the center {}.",
        Word::MIN_LEN,
        grid.center().to_string().bright_yellow().bold()
    )
}

/// Write `label (n words): a, b, c`
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_word_line<W: Write>(out: &mut W, label: &str, words: &WordSet) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}): {}",
        label.bright_cyan().bold(),
        count_words(words.len()),
        join_words(words)
    )
}

/// Write the found/total score bar
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_score<W: Write>(out: &mut W, result: &Reconciliation) -> io::Result<()> {
    let bar = create_progress_bar(
        result.correct_count() as f64,
        result.dictionary.len() as f64,
        30,
    );
    writeln!(
        out,
        "Score: [{}] {}/{}",
        bar.green(),
        result.correct_count().to_string().bright_yellow().bold(),
        result.dictionary.len()
    )
}

/// Print every dictionary word for a grid, longest first
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_solve_result(result: &SolveResult) -> io::Result<()> {
    write_grid(&mut io::stdout(), &result.grid)?;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} playable on this grid",
        count_words(result.words.len()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut current_len = 0;
    for word in result.by_length() {
        if word.len() != current_len {
            current_len = word.len();
            print!("\n{:>2} letters:", current_len.to_string().bright_cyan());
        }
        print!(" {word}");
    }
    println!();

    if result.longest.iter().any(|w| w.len() == GRID_LETTERS) {
        println!(
            "\n🎯 Full-grid word: {}",
            result
                .longest
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect::<Vec<_>>()
                .join(", ")
                .green()
                .bold()
        );
    }
    Ok(())
}

/// Print whether a word is accepted on a grid
pub fn print_check_result(result: &CheckResult) {
    let shown = result.word.to_uppercase();
    match &result.verdict {
        Ok(_) if result.in_dictionary => {
            println!("{} {}", "✅".green(), format!("{shown} is a valid word").green().bold());
        }
        Ok(_) => {
            println!(
                "{} {}",
                "⚠".yellow(),
                format!("{shown} fits the grid but is not in the dictionary").yellow()
            );
        }
        Err(reason) => {
            println!("{} {}", "❌".red(), format!("{shown}: {reason}").red());
            if !result.missing_letters.is_empty() {
                let missing: String = result.missing_letters.iter().collect();
                println!("   Letters not available: {}", missing.to_uppercase().bold());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterPool, filter_words};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn grid_is_drawn_in_a_box() {
        plain();
        let grid = Grid::from_letters("GAMEXYZWQ").unwrap();
        let mut out = Vec::new();
        write_grid(&mut out, &grid).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "╔═══════════╗");
        assert_eq!(lines[1], "║  G  A  M  ║");
        assert_eq!(lines[2], "║  E  X  Y  ║");
        assert_eq!(lines[4], "╚═══════════╝");
        assert!(lines[5].contains("center X"));
    }

    #[test]
    fn word_line_shows_count_and_words() {
        plain();
        let pool = LetterPool::new("gamemover".chars());
        let words = filter_words(["game", "memo"], &pool);
        let mut out = Vec::new();
        write_word_line(&mut out, "All valid words", &words).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "All valid words (2 words): game, memo\n"
        );
    }

    #[test]
    fn score_line_counts_found_words() {
        plain();
        let pool = LetterPool::new("gamemover".chars());
        let dictionary = filter_words(["game", "memo"], &pool);
        let user = filter_words(["memo"], &pool);
        let result = crate::commands::reconcile(&user, &dictionary);

        let mut out = Vec::new();
        write_score(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("] 1/2\n"));
    }
}
