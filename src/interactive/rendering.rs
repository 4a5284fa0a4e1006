//! TUI rendering with ratatui
//!
//! Grid, word list, messages and end-of-game results.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{CENTER_INDEX, GRID_SIZE, Word, WordSet};
use crate::output::formatters::{count_words, join_words};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_left_panel(f, app, main_chunks[0]);
    match app.input_mode {
        InputMode::Entering => render_words(f, app, main_chunks[1]),
        InputMode::Finished => render_results(f, app, main_chunks[1]),
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 TARGET - find the words in the grid")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_left_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Grid
            Constraint::Length(3), // Progress
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (r, row) in app.grid.rows().iter().enumerate() {
        let spans: Vec<Span> = row
            .iter()
            .enumerate()
            .map(|(c, letter)| {
                let style = if r * GRID_SIZE + c == CENTER_INDEX {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };
                Span::styled(format!(" {letter} "), style)
            })
            .flat_map(|cell| [Span::raw(" "), cell, Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Grid ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (ratio, label) = match &app.reconciliation {
        Some(result) => (
            result.found_ratio(),
            format!("{} of {} found", result.correct_count(), app.target_count()),
        ),
        None => {
            let entered = app.accepted.len();
            let ratio = if app.target_count() == 0 {
                0.0
            } else {
                (entered as f64 / app.target_count() as f64).min(1.0)
            };
            (
                ratio,
                format!("{entered} entered | target {}", app.target_count()),
            )
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .accepted
        .iter()
        .rev()
        .map(|word| ListItem::new(word.text().to_uppercase()))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your words ({}) ", app.accepted.len()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn word_section<'a>(title: &'a str, words: &WordSet, color: Color) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" ({})", count_words(words.len()))),
        ]),
        Line::from(join_words(words)),
        Line::from(""),
    ]
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = &app.reconciliation else {
        return;
    };

    let mut content = word_section("Correct", &result.good, Color::Green);
    content.extend(word_section("Not in dictionary", &result.pure, Color::Red));
    content.extend(word_section("Missed", &result.missed, Color::Yellow));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Entering => (
            " Enter words | Enter: submit | Esc/Ctrl-D: finish ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Finished => (" Game over | q: quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Center: {} | Minimum length: {} | Tokens entered: {}",
        app.grid.center(),
        Word::MIN_LEN,
        app.tokens.len()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
