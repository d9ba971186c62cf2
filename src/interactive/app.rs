//! TUI application state and logic

use crate::core::{Alert, Outcome, ScoreReset};
use crate::engine::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Application state
pub struct App<R: Rng> {
    pub session: Session<R>,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a word
    Editing,
    /// A modal alert is open; any confirming key closes it
    Alert,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(session: Session<R>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            input_mode: InputMode::Editing,
            alert: None,
            messages: vec![Message {
                text: "Spell words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit the current input buffer
    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            None => {}
            Some(Outcome::Accepted { word, score_delta }) => {
                self.add_message(&format!("{word} +{score_delta}"), MessageStyle::Success);
            }
            Some(Outcome::Rejected { reason, score_delta }) => {
                self.add_message(
                    &format!("{} {score_delta}", reason.title()),
                    MessageStyle::Error,
                );
                self.open_alert(reason.alert(self.session.round().root_word()));
            }
        }
    }

    pub fn next_word(&mut self) {
        self.session.next_word();
        self.input_buffer.clear();
        self.add_message(
            &format!("Next word: {}", self.session.round().root_word()),
            MessageStyle::Info,
        );
    }

    /// Restart the game
    ///
    /// The old score stays on screen while the restart alert is open and is
    /// cleared when the alert is dismissed.
    pub fn restart(&mut self) {
        let previous = self.session.restart(ScoreReset::Deferred);
        self.input_buffer.clear();
        self.messages.clear();
        self.open_alert(Alert {
            title: "Restarting".to_string(),
            message: format!("Your score was {previous}. Good luck!"),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Editing;
        if self.session.settle_score_reset() {
            debug!("Deferred score reset applied");
            self.add_message("Score reset", MessageStyle::Info);
        }
    }

    fn open_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
        self.input_mode = InputMode::Alert;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Editing => match code {
                KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.next_word();
                }
                KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                    self.restart();
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    let restored = restore_terminal(&mut terminal);

    session_result(res, restored)
}

fn restore_terminal<W: io::Write>(terminal: &mut Terminal<CrosstermBackend<W>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Combine the game loop result with terminal cleanup; a loop error wins
fn session_result(run: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &run {
        error!(error = %err, "TUI session failed");
    }
    run.and(restored)
}

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::RoundSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<StdRng> {
        let source = RoundSource::parse("alphabet:bat,tab,table").unwrap();
        App::new(Session::with_rng(source, StdRng::seed_from_u64(0)))
    }

    fn type_word(app: &mut App<StdRng>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn typing_and_enter_submits_word() {
        let mut app = app();
        type_word(&mut app, "table");

        assert_eq!(app.session.round().score(), 5);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn rejection_opens_alert_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "zzz");

        assert_eq!(app.input_mode, InputMode::Alert);
        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(app.session.round().score(), -1);

        // typing is ignored while the alert is open
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.alert.is_none());
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn blank_enter_does_nothing() {
        let mut app = app();
        type_word(&mut app, "   ");
        assert!(app.alert.is_none());
        assert_eq!(app.session.round().score(), 0);
    }

    #[test]
    fn restart_clears_score_after_alert() {
        let mut app = app();
        type_word(&mut app, "table");
        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.message, "Your score was 5. Good luck!");
        assert_eq!(app.session.round().score(), 5);

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.session.round().score(), 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn next_word_keeps_score() {
        let mut app = app();
        type_word(&mut app, "bat");
        app.handle_key(KeyCode::Char('n'), KeyModifiers::CONTROL);

        assert_eq!(app.session.round().score(), 3);
        assert_eq!(app.session.round().used_words().len(), 0);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn loop_error_is_returned_after_cleanup() {
        let res = session_result(Err(anyhow::anyhow!("event read failed")), Ok(()));
        assert_eq!(res.unwrap_err().to_string(), "event read failed");

        let res = session_result(
            Err(anyhow::anyhow!("draw failed")),
            Err(anyhow::anyhow!("cleanup")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");

        let res = session_result(Ok(()), Err(anyhow::anyhow!("cleanup")));
        assert_eq!(res.unwrap_err().to_string(), "cleanup");

        assert!(session_result(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn next_word_during_pending_restart_still_resets() {
        let mut app = app();
        type_word(&mut app, "table");
        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);
        app.dismiss_alert();
        assert_eq!(app.session.round().score(), 0);

        type_word(&mut app, "bat");
        app.session.restart(ScoreReset::Deferred);
        app.session.next_word();
        assert_eq!(app.session.round().score(), 3);
        assert!(app.session.round().score_reset_pending());

        app.dismiss_alert();
        assert_eq!(app.session.round().score(), 0);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
