//! Target word game - CLI
//!
//! Plays a round on stdin by default; also offers a full-screen mode and
//! helpers to solve a grid or check a single word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{LevelFilter, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use target_game::{
    commands::{SessionConfig, check_word, run_session, solve_grid},
    core::Grid,
    interactive::{App, run_tui},
    output::{print_check_result, print_solve_result, write_report},
    wordlists::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "target_game",
    about = "Find every word hidden in a 3x3 letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = "en.txt")]
    dictionary: PathBuf,

    /// Result file written at the end of a game
    #[arg(short, long, global = true, default_value = "result.txt")]
    result: PathBuf,

    /// Seed for a reproducible random grid
    #[arg(long, global = true, conflicts_with = "letters")]
    seed: Option<u64>,

    /// Use these nine letters (row-major) instead of a random grid
    #[arg(short, long, global = true)]
    letters: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play on the terminal: type words, finish with end-of-input (default)
    Play {
        /// Keep earlier terminal output instead of clearing the screen
        #[arg(long)]
        no_clear: bool,
    },

    /// Play in a full-screen interactive interface
    Tui,

    /// List every dictionary word playable on the grid
    Solve,

    /// Check whether a single word is accepted on the grid
    Check {
        /// The word to check
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Build the grid from --letters, --seed, or fresh randomness
fn build_grid(letters: Option<&str>, seed: Option<u64>) -> Result<Grid> {
    let grid = match (letters, seed) {
        (Some(letters), _) => {
            Grid::from_letters(letters).with_context(|| format!("invalid --letters {letters:?}"))?
        }
        (None, Some(seed)) => Grid::generate(&mut StdRng::seed_from_u64(seed)),
        (None, None) => Grid::generate(&mut rand::rng()),
    };
    info!("grid letters: {}", grid.pool());
    Ok(grid)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let grid = build_grid(cli.letters.as_deref(), cli.seed)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { no_clear: false });

    match command {
        Commands::Play { no_clear } => {
            let config = SessionConfig {
                dictionary: cli.dictionary,
                result: cli.result,
                clear_screen: !no_clear,
            };
            run_play_command(&config, &grid)
        }
        Commands::Tui => run_tui_command(&grid, &cli.dictionary, &cli.result),
        Commands::Solve => run_solve_command(&grid, &cli.dictionary),
        Commands::Check { word } => run_check_command(&word, &grid, &cli.dictionary),
    }
}

fn run_play_command(config: &SessionConfig, grid: &Grid) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(config, grid, stdin.lock(), &mut stdout)?;
    Ok(())
}

fn run_tui_command(grid: &Grid, dictionary_path: &Path, result_path: &Path) -> Result<()> {
    // Load before entering the alternate screen so a missing file is reported plainly
    let dictionary = load_dictionary(dictionary_path, &grid.pool())?;

    let app = App::new(*grid, &dictionary);
    if let Some(result) = run_tui(app)? {
        write_report(result_path, &result)?;
        println!(
            "You found {} of {} words. Results written to {}",
            result.correct_count(),
            result.dictionary.len(),
            result_path.display()
        );
    }
    Ok(())
}

fn run_solve_command(grid: &Grid, dictionary_path: &Path) -> Result<()> {
    let result = solve_grid(grid, dictionary_path)?;
    print_solve_result(&result)?;
    Ok(())
}

fn run_check_command(word: &str, grid: &Grid, dictionary_path: &Path) -> Result<()> {
    let dictionary = load_dictionary(dictionary_path, &grid.pool())?;
    let result = check_word(word, grid, &dictionary);
    println!("Grid: {}", grid.pool().to_string().to_uppercase());
    print_check_result(&result);
    Ok(())
}
