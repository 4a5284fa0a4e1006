//! TUI application state and logic

use crate::commands::{Reconciliation, reconcile};
use crate::core::{Grid, LetterPool, Word, WordSet, filter_words};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub grid: Grid,
    pub pool: LetterPool,
    pub dictionary: &'a WordSet,
    pub input_buffer: String,
    /// Every token the player submitted, lowercased, in order
    pub tokens: Vec<String>,
    /// Submitted words that pass the grid rules
    pub accepted: WordSet,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub reconciliation: Option<Reconciliation>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Entering,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(grid: Grid, dictionary: &'a WordSet) -> Self {
        Self {
            pool: grid.pool(),
            grid,
            dictionary,
            input_buffer: String::new(),
            tokens: Vec::new(),
            accepted: WordSet::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Find words of {}+ letters that use the center {}.",
                        Word::MIN_LEN,
                        grid.center()
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type words and press Enter. Esc or Ctrl-D when done.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Entering,
            reconciliation: None,
            should_quit: false,
        }
    }

    /// Number of dictionary words playable on the grid
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Submit everything in the input buffer
    ///
    /// Each token is checked against the grid rules immediately; dictionary
    /// membership is only revealed when the game finishes.
    pub fn handle_submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        for token in input.split_whitespace().map(str::to_lowercase) {
            match Word::new(&token, &self.pool) {
                Ok(word) => {
                    let shown = word.text().to_uppercase();
                    if self.accepted.insert(word) {
                        self.add_message(&format!("Added {shown}"), MessageStyle::Success);
                    } else {
                        self.add_message(
                            &format!("{shown} is already on your list"),
                            MessageStyle::Info,
                        );
                    }
                }
                Err(reason) => {
                    self.add_message(
                        &format!("{}: {reason}", token.to_uppercase()),
                        MessageStyle::Error,
                    );
                }
            }
            self.tokens.push(token);
        }
    }

    /// Score the submitted words and switch to the results view
    pub fn finish(&mut self) {
        if !self.input_buffer.trim().is_empty() {
            self.handle_submit();
        }

        let user_words = filter_words(&self.tokens, &self.pool);
        let result = reconcile(&user_words, self.dictionary);
        debug!(
            "tui game finished: {} tokens, {} correct",
            self.tokens.len(),
            result.correct_count()
        );

        self.add_message(
            &format!(
                "You found {} of {} words. Press q to quit.",
                result.correct_count(),
                result.dictionary.len()
            ),
            MessageStyle::Success,
        );
        self.reconciliation = Some(result);
        self.input_mode = InputMode::Finished;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// Returns the scored game if the player finished it, or `None` if they quit
/// early with Ctrl-C.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<Reconciliation>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<Reconciliation>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match app.input_mode {
                InputMode::Entering => match key.code {
                    KeyCode::Char('c') if ctrl => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('d') if ctrl => {
                        app.finish();
                    }
                    KeyCode::Esc => {
                        app.finish();
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        app.handle_submit();
                    }
                    _ => {}
                },
                InputMode::Finished => match key.code {
                    KeyCode::Char('c') if ctrl => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => {
                        app.should_quit = true;
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.reconciliation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Grid, WordSet) {
        let grid = Grid::from_letters("GAMEMOVER").unwrap();
        let dictionary = filter_words(["game", "mover", "memo"], &grid.pool());
        (grid, dictionary)
    }

    #[test]
    fn new_app_starts_entering() {
        let (grid, dictionary) = setup();
        let app = App::new(grid, &dictionary);

        assert_eq!(app.input_mode, InputMode::Entering);
        assert_eq!(app.target_count(), 3);
        assert!(app.reconciliation.is_none());
    }

    #[test]
    fn submit_accepts_and_rejects_tokens() {
        let (grid, dictionary) = setup();
        let mut app = App::new(grid, &dictionary);

        app.input_buffer = "MEMO gam grove memo".to_string();
        app.handle_submit();

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.tokens, vec!["memo", "gam", "grove", "memo"]);
        assert_eq!(app.accepted.texts(), vec!["memo"]);
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Info);
    }

    #[test]
    fn finish_scores_the_game() {
        let (grid, dictionary) = setup();
        let mut app = App::new(grid, &dictionary);

        app.input_buffer = "memo mome".to_string();
        app.handle_submit();
        app.input_buffer = "game".to_string();
        app.finish();

        assert_eq!(app.input_mode, InputMode::Finished);
        let result = app.reconciliation.as_ref().unwrap();
        assert_eq!(result.good.texts(), vec!["memo", "game"]);
        assert_eq!(result.pure.texts(), vec!["mome"]);
        assert_eq!(result.missed.texts(), vec!["mover"]);
    }

    #[test]
    fn finish_with_no_words() {
        let (grid, dictionary) = setup();
        let mut app = App::new(grid, &dictionary);
        app.finish();

        let result = app.reconciliation.as_ref().unwrap();
        assert_eq!(result.correct_count(), 0);
        assert_eq!(result.missed.len(), 3);
    }

    #[test]
    fn messages_are_capped() {
        let (grid, dictionary) = setup();
        let mut app = App::new(grid, &dictionary);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }
}
