//! TUI rendering with ratatui
//!
//! Draws the board, the hint keyboard and the side panels from the app's
//! latest snapshot.

use super::app::{App, MessageStyle};
use crate::core::LetterVerdict;
use crate::game::{Difficulty, Snapshot, TargetPicker};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board and keyboard
            Constraint::Percentage(40), // Result and messages
        ])
        .split(chunks[1]);

    render_play_area(f, &app.snapshot, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_play_area(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    // Each board row is one line plus a spacer
    let board_height = u16::try_from(snapshot.max_guesses * 2 + 1).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(board_height.saturating_add(2)),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(area);

    render_board(f, snapshot, chunks[0]);
    render_keyboard(f, snapshot, chunks[1]);
}

const fn verdict_color(verdict: LetterVerdict) -> Color {
    match verdict {
        LetterVerdict::Correct => Color::Green,
        LetterVerdict::Present => Color::Yellow,
        LetterVerdict::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, style: Style) -> Span<'static> {
    Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style)
}

fn board_line(snapshot: &Snapshot, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(snapshot.word_length * 2);

    if let Some((guess, result)) = snapshot.guesses.get(row) {
        for (letter, &verdict) in guess.chars().zip(result.verdicts()) {
            let style = Style::default()
                .fg(Color::Black)
                .bg(verdict_color(verdict))
                .add_modifier(Modifier::BOLD);
            spans.push(tile(letter, style));
            spans.push(Span::raw(" "));
        }
    } else if row == snapshot.row && !snapshot.over {
        let typed: Vec<char> = snapshot.current_input.chars().collect();
        for col in 0..snapshot.word_length {
            let style = Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD);
            let letter = typed.get(col).copied().unwrap_or('·');
            spans.push(tile(letter, style));
            spans.push(Span::raw(" "));
        }
    } else {
        for _ in 0..snapshot.word_length {
            spans.push(tile(' ', Style::default().bg(Color::Reset)));
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}

fn render_board(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut lines = Vec::with_capacity(snapshot.max_guesses * 2);
    for row in 0..snapshot.max_guesses {
        lines.push(board_line(snapshot, row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Board ({}) ", snapshot.level))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let mut lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|key| {
                    let style = snapshot.hints.get(key).map_or_else(
                        || Style::default().fg(Color::White),
                        |verdict| {
                            Style::default()
                                .fg(Color::Black)
                                .bg(verdict_color(verdict))
                        },
                    );
                    [tile(key, style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(
        Line::from("Enter: submit  ⌫: delete").style(Style::default().fg(Color::DarkGray)),
    );

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_info_panel<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Result and stats
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_result(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_result<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let snapshot = &app.snapshot;

    let mut content = match (&snapshot.target, snapshot.won) {
        (Some(target), true) => vec![
            Line::styled(
                "you won!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("the word was: {}", target.to_uppercase())),
        ],
        (Some(target), false) => vec![
            Line::styled(
                "game over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::from(format!("the word was: {}", target.to_uppercase())),
        ],
        (None, _) => vec![Line::from(format!(
            "Guess {} of {}",
            snapshot.guess_number(),
            snapshot.max_guesses
        ))],
    };

    content.push(Line::from(""));
    content.push(Line::from("Guess distribution:"));

    let max_count = app.stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in app.stats.guess_distribution.iter().enumerate().skip(1) {
        let width = if max_count == 0 { 0 } else { count * 16 / max_count };
        content.push(Line::from(vec![
            Span::raw(format!(" {guesses} ")),
            Span::styled("█".repeat(width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn level_label(level: Difficulty) -> String {
    let picker: Vec<String> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &l)| {
            if l == level {
                format!("[{} {}]", i + 1, l)
            } else {
                format!("{} {}", i + 1, l)
            }
        })
        .collect();
    picker.join(" ")
}

fn render_status<P: TargetPicker>(f: &mut Frame, app: &App<'_, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    let level_text = format!(
        "guess {}/{}  {}",
        app.snapshot.guess_number(),
        app.snapshot.max_guesses,
        level_label(app.snapshot.level)
    );
    let level = Paragraph::new(level_text).alignment(Alignment::Center);
    f.render_widget(level, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.snapshot.over {
        "Enter: New Game | Tab: Level | Esc: Quit"
    } else {
        "Ctrl-N: New Game | Tab: Level | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
