//! Simple line-based game mode
//!
//! Plays one round on plain stdin/stdout without the TUI: one guess per line.

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{Clock, Hint, HintError, InputError, Outcome, RoundSession};
use crate::output::display::{format_keyboard, format_row};
use crate::output::share::build_summary_text;
use crate::presence::{PresenceChannel, ProgressSink};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play a round reading guesses from `input`
///
/// Lines are either a guess, `?` for a hint, or `quit`. Input ending early
/// leaves the round unfinished.
///
/// # Errors
///
/// Returns an error only for I/O failures on `input` or `out`.
#[allow(clippy::too_many_lines)] // Game loop handles every input outcome inline
pub fn run_simple<C, R, S, I, O>(
    session: &mut RoundSession<'_, C, R>,
    config: &GameConfig,
    mut presence: Option<&mut PresenceChannel<S>>,
    input: &mut I,
    out: &mut O,
) -> io::Result<()>
where
    C: Clock,
    R: Rng,
    S: ProgressSink,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔════════════════════════════════════════╗")?;
    writeln!(
        out,
        "║  {:<38}║",
        format!("{} · Round {}", config.game_name, session.round_number())
    )?;
    writeln!(out, "╚════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        session.word_length(),
        session.max_attempts()
    )?;
    writeln!(out, "Commands: '?' for a hint, 'quit' to exit\n")?;

    let mut line = String::new();
    while session.outcome() == Outcome::InProgress {
        write!(
            out,
            "Guess {}/{}: ",
            session.current_row() + 1,
            session.max_attempts()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match line.trim() {
            "" => {}
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "?" | "hint" => match session.provide_hint() {
                Ok(Hint::New(letter)) => {
                    writeln!(out, "💡 The word contains {}", letter.to_uppercase())?;
                }
                Ok(Hint::Repeated(letter)) => {
                    writeln!(out, "💡 Still: the word contains {}", letter.to_uppercase())?;
                }
                Err(HintError::AlreadyFound(letter)) => {
                    writeln!(out, "You already found {}", letter.to_uppercase())?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            guess => {
                if let Err(e) = type_guess(session, guess) {
                    writeln!(out, "{}", format!("❌ {e}").red())?;
                    continue;
                }

                let submission = match session.submit_guess() {
                    Ok(submission) => submission,
                    Err(e) => {
                        clear_row(session);
                        writeln!(out, "{}", format!("❌ {e}").red())?;
                        continue;
                    }
                };

                if let Some(channel) = presence.as_deref_mut() {
                    channel.publish(submission.progress, session.clock().now());
                }

                if let Some(record) = session.guesses().last() {
                    writeln!(out, "   {}", format_row(record))?;
                }
                if submission.outcome == Outcome::InProgress {
                    writeln!(out, "\n{}\n", format_keyboard(&session.keyboard()))?;
                    // The row has been shown; move on
                    session
                        .advance_row()
                        .map_err(|e| io::Error::other(e.to_string()))?;
                }
            }
        }
    }

    let snapshot = session.snapshot();
    writeln!(out)?;
    match snapshot.outcome {
        Outcome::Won => writeln!(
            out,
            "{}",
            format!("🎉 Solved in {}/{}!", snapshot.attempts_used, snapshot.max_attempts)
                .green()
                .bold()
        )?,
        _ => writeln!(
            out,
            "{}",
            format!(
                "The word was {}",
                snapshot.target.unwrap_or_default().to_uppercase()
            )
            .red()
            .bold()
        )?,
    }

    writeln!(
        out,
        "\n{}\n",
        build_summary_text(&session.share_stats(), session.guesses(), config)
    )?;
    Ok(())
}

/// Feed a whole word into the session letter by letter
fn type_guess<C: Clock, R: Rng>(
    session: &mut RoundSession<'_, C, R>,
    guess: &str,
) -> Result<(), InputError> {
    let length = guess.chars().count();
    if length != session.word_length() {
        return Err(InputError::InvalidLength {
            expected: session.word_length(),
            actual: length,
        });
    }
    if Word::new(guess, length).is_err() {
        let bad = guess.chars().find(|c| !c.is_alphabetic()).unwrap_or(' ');
        return Err(InputError::InvalidLetter(bad));
    }

    for ch in guess.chars() {
        if let Err(e) = session.append_letter(ch) {
            clear_row(session);
            return Err(e);
        }
    }
    Ok(())
}

fn clear_row<C: Clock, R: Rng>(session: &mut RoundSession<'_, C, R>) {
    while session.backspace().is_ok() {}
}
