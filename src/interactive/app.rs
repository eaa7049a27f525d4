//! TUI application state and event loop

use super::editor::{EditOutcome, Editor};
use crate::core::EngineError;
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub editor: Editor,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let total = session.dictionary().len();
        Self {
            editor: Editor::new(session),
            messages: vec![
                Message {
                    text: format!("{total} words loaded. Type a guess, Space sets its colours."),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter submits the row, Delete clears it or reopens the last one."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let outcome = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.editor.reset();
                self.messages.clear();
                self.add_message("New grid started.", MessageStyle::Info);
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char(' ') => self.editor.cycle_state(),
            KeyCode::Char(c) => self.editor.type_letter(c),
            KeyCode::Backspace => self.editor.backspace(),
            KeyCode::Enter => self.editor.submit(),
            KeyCode::Delete => self.editor.delete(),
            _ => EditOutcome::Ignored,
        };
        self.report(&outcome);
    }

    fn report(&mut self, outcome: &EditOutcome) {
        match outcome {
            EditOutcome::Submitted { attempt, remaining } => {
                let row = attempt + 1;
                if *remaining == 0 {
                    self.add_message(
                        &format!("Row {row}: no words match. Delete to edit it."),
                        MessageStyle::Error,
                    );
                } else {
                    self.add_message(
                        &format!("Row {row}: {remaining} candidates remaining"),
                        MessageStyle::Success,
                    );
                }
                if self.editor.session().is_finished() {
                    self.add_message(
                        "Grid full. Delete reopens the last row, Ctrl-N starts over.",
                        MessageStyle::Info,
                    );
                }
            }
            EditOutcome::Reopened { attempt } => {
                self.add_message(
                    &format!("Reopened row {}", attempt + 1),
                    MessageStyle::Info,
                );
            }
            EditOutcome::Rejected(err) => {
                let text = match err {
                    EngineError::NotInDictionary(word) => {
                        format!("{word} is not in the word list")
                    }
                    other => other.to_string(),
                };
                self.add_message(&text, MessageStyle::Error);
            }
            _ => {}
        }
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
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Release and repeat events arrive as well on some platforms
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            debug!(
                "leaving TUI after {} submitted rows",
                app.editor.session().active_attempt()
            );
            break;
        }
    }

    Ok(())
}
