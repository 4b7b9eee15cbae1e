//! TUI application state and logic

use crate::config::GameConfig;
use crate::game::{Clock, Hint, HintError, InputError, Outcome, RoundSchedule, RoundSession};
use crate::output::formatters::countdown;
use crate::output::share::build_summary_text;
use crate::presence::{PresenceChannel, ProgressSink, TracingSink};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How often the countdown redraws without input
const TICK: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
///
/// `S` is the presence transport; the binary uses [`TracingSink`].
pub struct App<'a, C: Clock, R: Rng, S: ProgressSink = TracingSink> {
    pub session: RoundSession<'a, C, R>,
    pub config: &'a GameConfig,
    pub schedule: RoundSchedule,
    pub presence: Option<PresenceChannel<S>>,
    pub messages: Vec<Message>,
    /// The current row was rejected and should be drawn as an error
    pub shake: bool,
    pub share_text: Option<String>,
    pub should_quit: bool,
    stale_notified: bool,
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

impl<'a, C: Clock, R: Rng, S: ProgressSink> App<'a, C, R, S> {
    #[must_use]
    pub fn new(session: RoundSession<'a, C, R>, config: &'a GameConfig, schedule: RoundSchedule) -> Self {
        let mut app = Self {
            session,
            config,
            schedule,
            presence: None,
            messages: Vec::new(),
            shake: false,
            share_text: None,
            should_quit: false,
            stale_notified: false,
        };
        app.add_message(
            "Type a word and press Enter. Tab for a hint, Esc to quit.",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub fn with_presence(mut self, channel: PresenceChannel<S>) -> Self {
        self.presence = Some(channel);
        self
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.request_hint(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Char(c) => self.type_letter(c),
            _ => {}
        }
    }

    pub fn type_letter(&mut self, c: char) {
        self.shake = false;
        // Full rows and finished rounds ignore extra keys
        if let Err(e @ InputError::InvalidLetter(_)) = self.session.append_letter(c) {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    pub fn delete_letter(&mut self) {
        self.shake = false;
        let _ = self.session.backspace();
    }

    pub fn submit(&mut self) {
        let submission = match self.session.submit_guess() {
            Ok(submission) => submission,
            Err(e) => {
                self.shake = e.should_shake();
                if self.shake {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                }
                return;
            }
        };

        let now = self.session.clock().now();
        if let Some(channel) = self.presence.as_mut() {
            channel.publish(submission.progress, now);
        }

        match submission.outcome {
            Outcome::Won => {
                let celebration = match submission.row + 1 {
                    1 => "🎯 First try!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Splendid!",
                    4 => "👏 Great job!",
                    5 => "🎉 Nice work!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish();
            }
            Outcome::Lost => {
                let target = self.session.snapshot().target.unwrap_or_default();
                self.add_message(
                    &format!("The word was {}", target.to_uppercase()),
                    MessageStyle::Error,
                );
                self.finish();
            }
            Outcome::InProgress => {}
        }
    }

    pub fn request_hint(&mut self) {
        match self.session.provide_hint() {
            Ok(Hint::New(letter) | Hint::Repeated(letter)) => self.add_message(
                &format!("💡 The word contains {}", letter.to_uppercase()),
                MessageStyle::Info,
            ),
            Err(HintError::NotActive) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Info),
        }
    }

    /// Work that waits until the last frame is on screen
    ///
    /// A freshly submitted row is drawn once before focus moves down.
    pub fn after_draw(&mut self) {
        if self.session.is_row_pending() {
            let _ = self.session.advance_row();
        }
        if !self.stale_notified && self.session.is_stale() {
            self.stale_notified = true;
            self.add_message(
                "A new round has started. Restart to play it.",
                MessageStyle::Info,
            );
        }
    }

    /// Countdown to the next round, as `HH:MM:SS`
    #[must_use]
    pub fn countdown(&self) -> String {
        countdown(self.schedule.time_until_next_round(self.session.clock().now()))
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

    fn finish(&mut self) {
        self.share_text = Some(build_summary_text(
            &self.session.share_stats(),
            self.session.guesses(),
            self.config,
        ));
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<C: Clock, R: Rng, S: ProgressSink>(app: App<'_, C, R, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(Some(share)) => println!("\n{share}\n"),
        Ok(None) => {}
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, C: Clock, R: Rng, S: ProgressSink>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, C, R, S>,
) -> Result<Option<String>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;
        app.after_draw();

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.share_text)
}
