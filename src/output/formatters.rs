//! Formatting utilities for terminal output

use crate::core::Verdict;
use chrono::TimeDelta;

/// Render verdicts as a row of share glyphs
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.glyph()).collect()
}

/// Human phrase for a play time, e.g. `"2 minutes 30 seconds"`
///
/// Sub-second remainders are dropped. Returns `None` for anything under one
/// second, so callers can omit the line.
#[must_use]
pub fn duration_phrase(elapsed: TimeDelta) -> Option<String> {
    let total = elapsed.num_seconds();
    if total <= 0 {
        return None;
    }

    let minutes = total / 60;
    let seconds = total % 60;
    let phrase = match (minutes, seconds) {
        (0, s) => plural(s, "second"),
        (m, 0) => plural(m, "minute"),
        (m, s) => format!("{} {}", plural(m, "minute"), plural(s, "second")),
    };
    Some(phrase)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// `HH:MM:SS` countdown; negative input shows as zero
#[must_use]
pub fn countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}
