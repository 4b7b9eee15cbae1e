//! Display functions for command results

use super::formatters::countdown;
use crate::commands::{EvaluateResult, ScheduledRound, TodayInfo};
use crate::core::{GuessRecord, KeyboardState, Verdict};
use colored::{ColoredString, Colorize};

/// Keyboard layout used for the letter summary
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A single board tile, colored by verdict
#[must_use]
pub fn tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
    }
}

/// One settled guess as colored tiles
#[must_use]
pub fn format_row(guess: &GuessRecord) -> String {
    guess
        .tiles()
        .map(|(letter, verdict)| tile(letter, verdict).to_string())
        .collect()
}

/// Keyboard summary: known letters colored, untouched letters dimmed
///
/// Letters outside the layout that have a verdict are listed on an extra line.
#[must_use]
pub fn format_keyboard(keyboard: &KeyboardState) -> String {
    let key = |letter: char| -> String {
        let upper = letter.to_uppercase().to_string();
        match keyboard.get(letter) {
            Some(Verdict::Correct) => upper.green().bold().to_string(),
            Some(Verdict::Present) => upper.yellow().bold().to_string(),
            Some(Verdict::Absent) => upper.bright_black().strikethrough().to_string(),
            None => upper.white().to_string(),
        }
    };

    let mut lines: Vec<String> = KEYBOARD_ROWS
        .iter()
        .map(|row| row.chars().map(key).collect::<Vec<_>>().join(" "))
        .collect();

    let mut extra: Vec<char> = keyboard
        .letters()
        .filter(|c| !KEYBOARD_ROWS.iter().any(|row| row.contains(*c)))
        .collect();
    if !extra.is_empty() {
        extra.sort_unstable();
        lines.push(extra.into_iter().map(key).collect::<Vec<_>>().join(" "));
    }
    lines.join("\n")
}

/// Print a one-off evaluation
pub fn print_evaluation(result: &EvaluateResult) {
    let row: String = result
        .guess
        .chars()
        .zip(result.evaluation.verdicts())
        .map(|(letter, &verdict)| tile(letter, verdict).to_string())
        .collect();

    println!("\n{row}  {}", result.evaluation.to_emoji());
    println!(
        "   {} correct, {} present",
        result.evaluation.correct_count().to_string().green().bold(),
        result.evaluation.present_count().to_string().yellow().bold()
    );
    if result.evaluation.is_correct() {
        println!("   {}", "✅ Exact match".green().bold());
    }
}

/// Print the live round summary
pub fn print_today(info: &TodayInfo) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {}",
        "ROUND".bright_cyan().bold(),
        info.round_number.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(40).cyan());
    println!("   Started:     {}", info.started_at.format("%Y-%m-%d %H:%M UTC"));
    println!(
        "   Next round:  {} (in {})",
        info.next_round_at.format("%Y-%m-%d %H:%M UTC"),
        countdown(info.remaining).bright_yellow()
    );
    if let Some(target) = &info.target {
        println!("   Word:        {}", target.to_uppercase().bright_red().bold());
    }
}

/// Print upcoming round start times
pub fn print_schedule(rounds: &[ScheduledRound]) {
    println!("\n{}", "Upcoming rounds".bright_cyan().bold());
    for round in rounds {
        println!(
            "   R{:<6} {}",
            round.round_number,
            round.starts_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, aggregate, evaluate};
    use chrono::{TimeZone, Utc};

    fn record(guess: &str, target: &str) -> GuessRecord {
        let guess = Word::new(guess, 5).unwrap();
        let target = Word::new(target, 5).unwrap();
        let verdicts = evaluate(&guess, &target).unwrap().verdicts().to_vec();
        GuessRecord::new(guess, verdicts, 0, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn row_contains_uppercase_letters() {
        colored::control::set_override(false);
        assert_eq!(format_row(&record("lades", "kalem")), " L  A  D  E  S ");
    }

    #[test]
    fn keyboard_lists_extra_letters() {
        colored::control::set_override(false);
        let keyboard = aggregate(&[record("çiçek", "kalem")]);
        let text = format_keyboard(&keyboard);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Ç");
        assert!(lines[0].starts_with("Q W E R"));
    }

    #[test]
    fn keyboard_without_extras_has_three_rows() {
        colored::control::set_override(false);
        let keyboard = aggregate(&[record("lades", "kalem")]);
        assert_eq!(format_keyboard(&keyboard).lines().count(), 3);
    }
}
