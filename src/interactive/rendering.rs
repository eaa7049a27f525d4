//! TUI rendering with ratatui
//!
//! Guess grid on the left, remaining candidates on the right.

use super::app::{App, MessageStyle};
use crate::core::{GuessRow, Letter, LetterState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// How a grid row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Submitted,
    Active { cursor: usize },
    Future,
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid and candidates
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_candidates_panel(f, app, main_chunks[1]);
    render_messages(f, app, chunks[2]);
    render_help(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE FILTER")
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

fn state_colors(state: LetterState) -> (Color, Color) {
    match state {
        LetterState::PresentHere => (Color::Black, Color::Green),
        LetterState::PresentWrongSpot => (Color::Black, Color::Yellow),
        LetterState::Absent => (Color::White, Color::DarkGray),
        LetterState::AbsentHereButElsewhere => (Color::Yellow, Color::DarkGray),
    }
}

fn tile(letter: &Letter, kind: RowKind, index: usize) -> Span<'static> {
    let text = format!(" {} ", letter.character().unwrap_or(' '));

    let style = match kind {
        RowKind::Future => Style::default().fg(Color::DarkGray).bg(Color::Black),
        RowKind::Submitted | RowKind::Active { .. } if letter.is_empty() => {
            Style::default().bg(Color::Black)
        }
        RowKind::Submitted | RowKind::Active { .. } => {
            let (fg, bg) = state_colors(letter.state());
            let style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
            if letter.state() == LetterState::AbsentHereButElsewhere {
                style.add_modifier(Modifier::UNDERLINED)
            } else {
                style
            }
        }
    };

    let style = match kind {
        RowKind::Active { cursor } if cursor == index => style.add_modifier(Modifier::REVERSED),
        _ => style,
    };

    Span::styled(text, style)
}

fn grid_line(row: &GuessRow, kind: RowKind) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2 + 1);
    spans.push(Span::raw(" "));
    for (index, letter) in row.letters().iter().enumerate() {
        spans.push(tile(letter, kind, index));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let session = app.editor.session();
    let config = session.config();
    let empty = GuessRow::new(config.word_length);

    let mut lines = Vec::with_capacity(config.max_rows * 2);
    for index in 0..config.max_rows {
        let line = if let Some(attempt) = session.attempts().get(index) {
            grid_line(attempt.row(), RowKind::Submitted)
        } else if index == session.active_attempt() {
            grid_line(
                session.active_row(),
                RowKind::Active {
                    cursor: app.editor.cursor(),
                },
            )
        } else {
            grid_line(&empty, RowKind::Future)
        };
        lines.push(line);
        lines.push(Line::from(""));
    }

    let title = format!(
        " Guesses {}/{} ",
        session.active_attempt().min(config.max_rows),
        config.max_rows
    );
    let grid = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_candidates_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_remaining_gauge(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn render_remaining_gauge(f: &mut Frame, app: &App, area: Rect) {
    let session = app.editor.session();
    let total = session.dictionary().len().max(1);
    let remaining = session.current_candidates().len();
    let percent = u16::try_from(remaining * 100 / total).unwrap_or(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Remaining ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{remaining}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.editor.session().current_candidates();
    let visible = usize::from(area.height.saturating_sub(2));

    let items: Vec<ListItem> = if candidates.is_empty() {
        vec![ListItem::new("No words match").style(Style::default().fg(Color::Red))]
    } else {
        candidates
            .iter()
            .take(visible)
            .map(|word| ListItem::new(word.as_str()))
            .collect()
    };

    let hidden = candidates.len().saturating_sub(visible);
    let title = if hidden > 0 {
        format!(" Candidates ({}, {hidden} not shown) ", candidates.len())
    } else {
        format!(" Candidates ({}) ", candidates.len())
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
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

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "A-Z: Letter | Space: Colour | Backspace: Erase | Enter: Submit | Del: Clear/Reopen | Ctrl-N: New | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
