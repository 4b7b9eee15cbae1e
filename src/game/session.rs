//! Round session state machine
//!
//! One `RoundSession` owns everything that changes during a round: the typed
//! buffer, the settled guesses, the hint, the timer and the outcome.
//!
//! Submitting a non-winning guess does not move to the next row by itself.
//! The caller finishes presenting the row and then calls
//! [`RoundSession::advance_row`]; until then the session reports `RowPending`.

use super::clock::Clock;
use super::error::{HintError, InputError, StartError};
use super::schedule::RoundSchedule;
use crate::config::GameConfig;
use crate::core::{Evaluation, GuessRecord, KeyboardState, Word, aggregate, evaluate};
use crate::output::share::ShareStats;
use crate::presence::ProgressReport;
use crate::wordlists::WordCatalog;
use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

/// Round outcome; only moves forward from `InProgress`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A hint letter handed to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// First hint of the session
    New(char),
    /// The same letter again; it has not been guessed yet
    Repeated(char),
}

impl Hint {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::New(letter) | Self::Repeated(letter) => letter,
        }
    }
}

/// Result of a settled guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub evaluation: Evaluation,
    /// Row the guess was recorded at
    pub row: usize,
    pub outcome: Outcome,
    /// What to broadcast to the multiplayer channel
    pub progress: ProgressReport,
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub round_number: u64,
    pub current_guess: String,
    pub current_row: usize,
    pub row_pending: bool,
    pub guesses: Vec<GuessRecord>,
    pub outcome: Outcome,
    pub hint_letter: Option<char>,
    pub keyboard: KeyboardState,
    pub attempts_used: usize,
    pub max_attempts: usize,
    pub word_length: usize,
    pub elapsed_ms: i64,
    /// Only present once the round is over
    pub target: Option<String>,
}

/// The live state of one round
pub struct RoundSession<'a, C: Clock, R: Rng> {
    catalog: &'a WordCatalog,
    schedule: Option<RoundSchedule>,
    round_index: u64,
    max_attempts: usize,
    clock: C,
    rng: R,
    target: Word,
    current_guess: Vec<char>,
    current_row: usize,
    row_pending: bool,
    guesses: Vec<GuessRecord>,
    outcome: Outcome,
    hint_letter: Option<char>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl<'a, C: Clock, R: Rng> RoundSession<'a, C, R> {
    /// Start the round that is live now according to `schedule`
    ///
    /// # Errors
    ///
    /// Returns `StartError` if the config is invalid, its word length differs
    /// from the catalog's, or the catalog is empty.
    pub fn start(
        config: &GameConfig,
        schedule: RoundSchedule,
        catalog: &'a WordCatalog,
        clock: C,
        rng: R,
    ) -> Result<Self, StartError> {
        config.validate()?;
        if config.word_length != catalog.word_length() {
            return Err(StartError::WordLengthMismatch {
                config: config.word_length,
                catalog: catalog.word_length(),
            });
        }

        let round_index = schedule.round_index(clock.now());
        let target = catalog.word_for_round(round_index)?.clone();
        info!(round = round_index + 1, "round started");

        let mut session = Self::with_target(config, catalog, target, clock, rng);
        session.schedule = Some(schedule);
        session.round_index = round_index;
        Ok(session)
    }

    /// Start a session against a fixed target, outside any schedule
    #[must_use]
    pub fn with_target(
        config: &GameConfig,
        catalog: &'a WordCatalog,
        target: Word,
        clock: C,
        rng: R,
    ) -> Self {
        Self {
            catalog,
            schedule: None,
            round_index: 0,
            max_attempts: config.max_attempts,
            clock,
            rng,
            target,
            current_guess: Vec::new(),
            current_row: 0,
            row_pending: false,
            guesses: Vec::new(),
            outcome: Outcome::InProgress,
            hint_letter: None,
            started_at: None,
            ended_at: None,
        }
    }

    /// Type one letter into the current row
    ///
    /// Returns the position the letter landed at. The first letter of the
    /// session starts the timer.
    ///
    /// # Errors
    ///
    /// `NotActive` after the round ended, `RowPending` while a submitted row
    /// awaits advance, `InvalidLetter` for non-letters, `RowFull` when the row
    /// already has every letter.
    pub fn append_letter(&mut self, ch: char) -> Result<usize, InputError> {
        self.ensure_accepting_input()?;

        let mut lower = ch.to_lowercase();
        let letter = match (lower.next(), lower.next()) {
            (Some(letter), None) if letter.is_alphabetic() => letter,
            _ => return Err(InputError::InvalidLetter(ch)),
        };

        if self.current_guess.len() >= self.word_length() {
            return Err(InputError::RowFull);
        }

        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
            debug!("round timer started");
        }

        self.current_guess.push(letter);
        Ok(self.current_guess.len() - 1)
    }

    /// Remove the last typed letter
    ///
    /// Returns the new buffer length.
    ///
    /// # Errors
    ///
    /// `NotActive`, `RowPending`, or `NothingToDelete` on an empty row.
    pub fn backspace(&mut self) -> Result<usize, InputError> {
        self.ensure_accepting_input()?;
        if self.current_guess.pop().is_none() {
            return Err(InputError::NothingToDelete);
        }
        Ok(self.current_guess.len())
    }

    /// Validate, evaluate and record the current row
    ///
    /// # Errors
    ///
    /// `NotActive`, `RowPending`, `InvalidLength` if the row is not full,
    /// `InvalidWord` if the catalog rejects it. None of these consume the row.
    pub fn submit_guess(&mut self) -> Result<Submission, InputError> {
        self.ensure_accepting_input()?;

        let expected = self.word_length();
        if self.current_guess.len() != expected {
            return Err(InputError::InvalidLength {
                expected,
                actual: self.current_guess.len(),
            });
        }

        let text: String = self.current_guess.iter().collect();
        if !self.catalog.is_valid(&text) {
            return Err(InputError::InvalidWord(text));
        }
        let word = Word::new(&text, expected).map_err(|_| InputError::InvalidWord(text))?;

        let evaluation = evaluate(&word, &self.target)?;
        let now = self.clock.now();
        let row = self.current_row;
        self.guesses.push(GuessRecord::new(
            word,
            evaluation.verdicts().to_vec(),
            row,
            now,
        ));

        if evaluation.is_correct() {
            self.finish(Outcome::Won, now);
        } else if row + 1 >= self.max_attempts {
            self.finish(Outcome::Lost, now);
        } else {
            self.row_pending = true;
        }

        debug!(
            row,
            correct = evaluation.correct_count(),
            present = evaluation.present_count(),
            "guess settled"
        );

        Ok(Submission {
            row,
            outcome: self.outcome,
            progress: ProgressReport {
                attempts_used: self.attempts_used(),
                letters_found: evaluation.correct_count(),
                is_completed: self.outcome == Outcome::Won,
            },
            evaluation,
        })
    }

    /// Move focus to the next row after a non-terminal submission
    ///
    /// Returns the new current row.
    ///
    /// # Errors
    ///
    /// `NotActive` after the round ended, `NoPendingRow` if nothing was submitted.
    pub fn advance_row(&mut self) -> Result<usize, InputError> {
        if self.outcome.is_terminal() {
            return Err(InputError::NotActive);
        }
        if !self.row_pending {
            return Err(InputError::NoPendingRow);
        }
        self.row_pending = false;
        self.current_row += 1;
        self.current_guess.clear();
        Ok(self.current_row)
    }

    /// Reveal one letter of the target
    ///
    /// The first call picks a random letter the player has not typed or
    /// guessed yet and fixes it for the session. Later calls return that same
    /// letter until it shows up in a guess.
    ///
    /// # Errors
    ///
    /// `AlreadyFound` once the hint letter was guessed, `AllRevealed` if no
    /// unguessed letter remains, `NotActive` after the round ended.
    pub fn provide_hint(&mut self) -> Result<Hint, HintError> {
        if self.outcome.is_terminal() {
            return Err(HintError::NotActive);
        }

        if let Some(letter) = self.hint_letter {
            if self.has_seen_letter(letter) {
                return Err(HintError::AlreadyFound(letter));
            }
            return Ok(Hint::Repeated(letter));
        }

        let unrevealed: Vec<char> = self
            .target
            .distinct_letters()
            .into_iter()
            .filter(|&letter| !self.has_seen_letter(letter))
            .collect();
        if unrevealed.is_empty() {
            return Err(HintError::AllRevealed);
        }

        let letter = unrevealed[self.rng.random_range(0..unrevealed.len())];
        self.hint_letter = Some(letter);
        debug!(candidates = unrevealed.len(), "hint issued");
        Ok(Hint::New(letter))
    }

    /// Snapshot for renderers; the target is hidden until the round ends
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            round_number: self.round_number(),
            current_guess: self.current_guess(),
            current_row: self.current_row,
            row_pending: self.row_pending,
            guesses: self.guesses.clone(),
            outcome: self.outcome,
            hint_letter: self.hint_letter,
            keyboard: self.keyboard(),
            attempts_used: self.attempts_used(),
            max_attempts: self.max_attempts,
            word_length: self.word_length(),
            elapsed_ms: self.elapsed().num_milliseconds(),
            target: self
                .outcome
                .is_terminal()
                .then(|| self.target.text().to_string()),
        }
    }

    /// Figures for the share summary
    #[must_use]
    pub fn share_stats(&self) -> ShareStats {
        ShareStats {
            round_number: self.round_number(),
            attempts_used: self.attempts_used(),
            max_attempts: self.max_attempts,
            hint_used: self.hint_used(),
            elapsed: self.started_at.map(|_| self.elapsed()),
        }
    }

    /// Target word for trusted debug paths only
    #[must_use]
    pub const fn debug_target(&self) -> &Word {
        &self.target
    }

    /// Whether the schedule has moved on to a later round
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.schedule
            .is_some_and(|s| s.round_index(self.clock.now()) != self.round_index)
    }

    /// Time played: zero before the first letter, frozen once the round ends
    #[must_use]
    pub fn elapsed(&self) -> TimeDelta {
        match self.started_at {
            None => TimeDelta::zero(),
            Some(start) => self.ended_at.unwrap_or_else(|| self.clock.now()) - start,
        }
    }

    /// Number of settled guesses
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    /// Best-known verdict per letter across all guesses
    #[must_use]
    pub fn keyboard(&self) -> KeyboardState {
        aggregate(&self.guesses)
    }

    #[must_use]
    pub fn current_guess(&self) -> String {
        self.current_guess.iter().collect()
    }

    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[must_use]
    pub const fn is_row_pending(&self) -> bool {
        self.row_pending
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn hint_letter(&self) -> Option<char> {
        self.hint_letter
    }

    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint_letter.is_some()
    }

    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    #[must_use]
    pub const fn round_index(&self) -> u64 {
        self.round_index
    }

    #[must_use]
    pub const fn round_number(&self) -> u64 {
        self.round_index + 1
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    fn ensure_accepting_input(&self) -> Result<(), InputError> {
        if self.outcome.is_terminal() {
            return Err(InputError::NotActive);
        }
        if self.row_pending {
            return Err(InputError::RowPending);
        }
        Ok(())
    }

    fn has_seen_letter(&self, letter: char) -> bool {
        self.current_guess.contains(&letter)
            || self.guesses.iter().any(|g| g.word().has_letter(letter))
    }

    fn finish(&mut self, outcome: Outcome, now: DateTime<Utc>) {
        self.outcome = outcome;
        if self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
        info!(
            round = self.round_number(),
            ?outcome,
            attempts = self.attempts_used(),
            "round finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::game::clock::ManualClock;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type TestSession<'a> = RoundSession<'a, ManualClock, StdRng>;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn catalog() -> WordCatalog {
        WordCatalog::from_strs(
            &[
                "kalem", "lades", "crane", "slate", "irate", "melak", "pizza", "mango",
            ],
            5,
        )
    }

    fn session<'a>(catalog: &'a WordCatalog, target: &str) -> TestSession<'a> {
        session_with_seed(catalog, target, 7)
    }

    fn session_with_seed<'a>(catalog: &'a WordCatalog, target: &str, seed: u64) -> TestSession<'a> {
        RoundSession::with_target(
            &GameConfig::default(),
            catalog,
            Word::new(target, 5).unwrap(),
            ManualClock::new(t0()),
            StdRng::seed_from_u64(seed),
        )
    }

    fn type_word(session: &mut TestSession<'_>, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch).unwrap();
        }
    }

    fn play(session: &mut TestSession<'_>, word: &str) -> Submission {
        type_word(session, word);
        let submission = session.submit_guess().unwrap();
        if !submission.outcome.is_terminal() {
            session.advance_row().unwrap();
        }
        submission
    }

    #[test]
    fn new_session_is_fresh() {
        let catalog = catalog();
        let s = session(&catalog, "kalem");
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert_eq!(s.current_row(), 0);
        assert!(s.guesses().is_empty());
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.hint_letter(), None);
        assert_eq!(s.started_at(), None);
        assert_eq!(s.elapsed(), TimeDelta::zero());
    }

    #[test]
    fn append_letter_normalizes_and_fills_row() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");

        assert_eq!(s.append_letter('K'), Ok(0));
        type_word(&mut s, "alem");
        assert_eq!(s.current_guess(), "kalem");
        assert_eq!(s.append_letter('x'), Err(InputError::RowFull));
        assert_eq!(s.current_guess(), "kalem");
    }

    #[test]
    fn append_letter_rejects_non_letters() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        assert_eq!(s.append_letter('3'), Err(InputError::InvalidLetter('3')));
        assert_eq!(s.append_letter(' '), Err(InputError::InvalidLetter(' ')));
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.started_at(), None);
    }

    #[test]
    fn timer_starts_on_first_letter() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");

        s.clock().advance(TimeDelta::minutes(10));
        s.append_letter('l').unwrap();
        assert_eq!(s.started_at(), Some(t0() + TimeDelta::minutes(10)));

        s.clock().advance(TimeDelta::seconds(90));
        s.append_letter('a').unwrap();
        assert_eq!(s.started_at(), Some(t0() + TimeDelta::minutes(10)));
        assert_eq!(s.elapsed(), TimeDelta::seconds(90));
    }

    #[test]
    fn backspace_removes_last_letter() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        assert_eq!(s.backspace(), Err(InputError::NothingToDelete));

        type_word(&mut s, "lad");
        assert_eq!(s.backspace(), Ok(2));
        assert_eq!(s.current_guess(), "la");
    }

    #[test]
    fn short_guess_is_not_consumed() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        type_word(&mut s, "lad");

        let err = s.submit_guess().unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidLength {
                expected: 5,
                actual: 3
            }
        );
        assert!(err.should_shake());
        assert!(s.guesses().is_empty());
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_guess(), "lad");
        assert!(!s.is_row_pending());
    }

    #[test]
    fn unknown_word_is_not_consumed() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        type_word(&mut s, "qwert");

        assert_eq!(
            s.submit_guess(),
            Err(InputError::InvalidWord("qwert".into()))
        );
        assert!(s.guesses().is_empty());
        assert_eq!(s.current_row(), 0);
        assert_eq!(s.current_guess(), "qwert");
    }

    #[test]
    fn submit_then_advance_is_two_steps() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        type_word(&mut s, "lades");

        let submission = s.submit_guess().unwrap();
        assert_eq!(submission.row, 0);
        assert_eq!(submission.outcome, Outcome::InProgress);
        assert_eq!(
            submission.evaluation.verdicts(),
            &[
                Verdict::Present,
                Verdict::Correct,
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Absent
            ]
        );

        // Row stays put until the caller advances
        assert_eq!(s.current_row(), 0);
        assert!(s.is_row_pending());
        assert_eq!(s.append_letter('k'), Err(InputError::RowPending));
        assert_eq!(s.backspace(), Err(InputError::RowPending));
        assert_eq!(s.submit_guess(), Err(InputError::RowPending));
        assert_eq!(s.guesses().len(), 1);

        assert_eq!(s.advance_row(), Ok(1));
        assert_eq!(s.current_guess(), "");
        assert_eq!(s.advance_row(), Err(InputError::NoPendingRow));
        assert_eq!(s.append_letter('k'), Ok(0));
    }

    #[test]
    fn correct_guess_wins_and_freezes() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        play(&mut s, "lades");
        s.clock().advance(TimeDelta::seconds(30));
        let submission = play(&mut s, "kalem");

        assert_eq!(submission.outcome, Outcome::Won);
        assert_eq!(s.outcome(), Outcome::Won);
        assert_eq!(s.current_row(), 1);
        assert_eq!(s.ended_at(), Some(t0() + TimeDelta::seconds(30)));

        assert_eq!(s.append_letter('a'), Err(InputError::NotActive));
        assert_eq!(s.backspace(), Err(InputError::NotActive));
        assert_eq!(s.submit_guess(), Err(InputError::NotActive));
        assert_eq!(s.advance_row(), Err(InputError::NotActive));
        assert_eq!(s.provide_hint(), Err(HintError::NotActive));
        assert_eq!(s.guesses().len(), 2);

        // Elapsed time is frozen at the end
        s.clock().advance(TimeDelta::hours(1));
        assert_eq!(s.elapsed(), TimeDelta::seconds(30));
    }

    #[test]
    fn six_misses_lose() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        for (i, word) in ["lades", "crane", "slate", "irate", "pizza"]
            .iter()
            .enumerate()
        {
            let submission = play(&mut s, word);
            assert_eq!(submission.outcome, Outcome::InProgress);
            assert_eq!(submission.row, i);
        }

        let last = play(&mut s, "mango");
        assert_eq!(last.outcome, Outcome::Lost);
        assert_eq!(s.outcome(), Outcome::Lost);
        assert_eq!(s.attempts_used(), 6);
        assert_eq!(s.current_row(), 5);
        assert!(s.ended_at().is_some());
        assert_eq!(s.snapshot().target.as_deref(), Some("kalem"));
    }

    #[test]
    fn win_on_last_row_is_a_win() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        for word in ["lades", "crane", "slate", "irate", "pizza"] {
            play(&mut s, word);
        }
        let last = play(&mut s, "kalem");
        assert_eq!(last.outcome, Outcome::Won);
        assert_eq!(last.progress.attempts_used, 6);
    }

    #[test]
    fn progress_report_counts_settled_guesses() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");

        let first = play(&mut s, "lades");
        assert_eq!(
            first.progress,
            ProgressReport {
                attempts_used: 1,
                letters_found: 2,
                is_completed: false
            }
        );

        let second = play(&mut s, "kalem");
        assert_eq!(
            second.progress,
            ProgressReport {
                attempts_used: 2,
                letters_found: 5,
                is_completed: true
            }
        );
    }

    #[test]
    fn hint_is_stable_until_found() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");

        let first = s.provide_hint().unwrap();
        let letter = first.letter();
        assert_eq!(first, Hint::New(letter));
        assert!(s.debug_target().has_letter(letter));

        let second = s.provide_hint().unwrap();
        assert_eq!(second, Hint::Repeated(letter));
        assert_eq!(s.hint_letter(), Some(letter));
        assert!(s.hint_used());
    }

    #[test]
    fn hint_avoids_letters_already_guessed() {
        let catalog = catalog();
        for seed in 0..32 {
            let mut s = session_with_seed(&catalog, "kalem", seed);
            play(&mut s, "lades");
            let letter = s.provide_hint().unwrap().letter();
            assert!(matches!(letter, 'k' | 'm'), "seed {seed} gave {letter}");
        }
    }

    #[test]
    fn hint_is_deterministic_for_a_seed() {
        let catalog = catalog();
        let mut a = session_with_seed(&catalog, "kalem", 42);
        let mut b = session_with_seed(&catalog, "kalem", 42);
        assert_eq!(a.provide_hint(), b.provide_hint());
    }

    #[test]
    fn hint_already_found_after_guessing_it() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        let letter = s.provide_hint().unwrap().letter();

        // MELAK contains every letter of KALEM
        play(&mut s, "melak");
        assert_eq!(s.provide_hint(), Err(HintError::AlreadyFound(letter)));
        assert_eq!(s.hint_letter(), Some(letter));
    }

    #[test]
    fn hint_all_revealed() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        play(&mut s, "melak");
        assert_eq!(s.provide_hint(), Err(HintError::AllRevealed));
        assert_eq!(s.hint_letter(), None);
    }

    #[test]
    fn hint_counts_the_typed_buffer() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        play(&mut s, "lades");
        type_word(&mut s, "km");
        assert_eq!(s.provide_hint(), Err(HintError::AllRevealed));
    }

    #[test]
    fn snapshot_hides_target_mid_round() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        play(&mut s, "lades");
        type_word(&mut s, "cr");

        let snapshot = s.snapshot();
        assert_eq!(snapshot.target, None);
        assert_eq!(snapshot.current_guess, "cr");
        assert_eq!(snapshot.current_row, 1);
        assert_eq!(snapshot.attempts_used, 1);
        assert_eq!(snapshot.keyboard.get('a'), Some(Verdict::Correct));
        assert_eq!(snapshot.keyboard.get('d'), Some(Verdict::Absent));

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["outcome"], "in_progress");
        assert!(json["target"].is_null());
    }

    #[test]
    fn share_stats_reflect_session() {
        let catalog = catalog();
        let mut s = session(&catalog, "kalem");
        assert_eq!(s.share_stats().elapsed, None);

        s.provide_hint().unwrap();
        type_word(&mut s, "kale");
        s.clock().advance(TimeDelta::seconds(75));
        s.append_letter('m').unwrap();
        s.submit_guess().unwrap();

        let stats = s.share_stats();
        assert_eq!(stats.round_number, 1);
        assert_eq!(stats.attempts_used, 1);
        assert_eq!(stats.max_attempts, 6);
        assert!(stats.hint_used);
        assert_eq!(stats.elapsed, Some(TimeDelta::seconds(75)));
    }

    #[test]
    fn start_follows_schedule() {
        let catalog = catalog();
        let config = GameConfig {
            epoch: t0(),
            ..GameConfig::default()
        };
        let schedule = RoundSchedule::from_config(&config).unwrap();
        let clock = ManualClock::new(t0() + TimeDelta::hours(4) + TimeDelta::milliseconds(1));

        let s = RoundSession::start(&config, schedule, &catalog, &clock, StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(s.round_index(), 1);
        assert_eq!(s.round_number(), 2);
        assert_eq!(s.debug_target().text(), "lades");
        assert!(!s.is_stale());

        clock.advance(TimeDelta::hours(4));
        assert!(s.is_stale());
    }

    #[test]
    fn start_rejects_bad_setup() {
        let catalog = catalog();
        let schedule = RoundSchedule::from_config(&GameConfig::default()).unwrap();
        let clock = ManualClock::new(t0());

        let bad_length = GameConfig {
            word_length: 6,
            ..GameConfig::default()
        };
        assert!(matches!(
            RoundSession::start(&bad_length, schedule, &catalog, &clock, StdRng::seed_from_u64(1)),
            Err(StartError::WordLengthMismatch { .. })
        ));

        let empty = WordCatalog::new(Vec::new(), 5);
        assert!(matches!(
            RoundSession::start(
                &GameConfig::default(),
                schedule,
                &empty,
                &clock,
                StdRng::seed_from_u64(1)
            ),
            Err(StartError::Catalog(_))
        ));
    }

    #[test]
    fn fixed_target_session_is_never_stale() {
        let catalog = catalog();
        let s = session(&catalog, "kalem");
        s.clock().advance(TimeDelta::days(30));
        assert!(!s.is_stale());
    }
}
