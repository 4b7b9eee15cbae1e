//! Share text
//!
//! The spoiler-free summary a player copies after a round: title line, hint
//! line, optional play time, the verdict grid and a link.

use super::formatters::{duration_phrase, verdicts_to_emoji};
use crate::config::GameConfig;
use crate::core::{GuessRecord, Verdict};
use chrono::TimeDelta;

/// Figures the summary is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareStats {
    pub round_number: u64,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub hint_used: bool,
    /// `None` if the player never typed a letter
    pub elapsed: Option<TimeDelta>,
}

/// One glyph row per guess, in submission order
#[must_use]
pub fn build_grid(guesses: &[GuessRecord]) -> Vec<String> {
    guesses
        .iter()
        .map(|guess| verdicts_to_emoji(guess.verdicts()))
        .collect()
}

/// Parse grid rows back into verdicts
///
/// Returns `None` if any character is not a share glyph.
#[must_use]
pub fn grid_to_verdicts<S: AsRef<str>>(rows: &[S]) -> Option<Vec<Vec<Verdict>>> {
    rows.iter()
        .map(|row| row.as_ref().chars().map(Verdict::from_glyph).collect())
        .collect()
}

/// Full share text, blocks separated by blank lines
///
/// # Examples
/// ```
/// use wordle_rounds::config::GameConfig;
/// use wordle_rounds::output::share::{ShareStats, build_summary_text};
///
/// let stats = ShareStats {
///     round_number: 12,
///     attempts_used: 0,
///     max_attempts: 6,
///     hint_used: false,
///     elapsed: None,
/// };
/// let text = build_summary_text(&stats, &[], &GameConfig::default());
/// assert!(text.starts_with("Wordle Rounds R12 0/6\n\nNo hint used"));
/// ```
#[must_use]
pub fn build_summary_text(stats: &ShareStats, guesses: &[GuessRecord], config: &GameConfig) -> String {
    let mut blocks = vec![
        format!(
            "{} R{} {}/{}",
            config.game_name, stats.round_number, stats.attempts_used, stats.max_attempts
        ),
        if stats.hint_used {
            "Hint used".to_string()
        } else {
            "No hint used".to_string()
        },
    ];

    if let Some(phrase) = stats.elapsed.and_then(duration_phrase) {
        blocks.push(format!("⏱️ Solved in {phrase}"));
    }

    blocks.push(build_grid(guesses).join("\n"));
    blocks.push(config.share_url.clone());
    blocks.join("\n\n")
}
