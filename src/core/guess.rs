//! Settled guess records

use super::{Verdict, Word};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A guess that passed validation and was evaluated
///
/// Immutable once created; owned by the round session that recorded it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessRecord {
    word: Word,
    verdicts: Vec<Verdict>,
    row: usize,
    timestamp: DateTime<Utc>,
}

impl GuessRecord {
    /// Create a record for a guess submitted at `row`
    ///
    /// # Panics
    /// Panics in debug mode if the verdict count differs from the word length
    #[must_use]
    pub fn new(word: Word, verdicts: Vec<Verdict>, row: usize, timestamp: DateTime<Utc>) -> Self {
        debug_assert_eq!(word.len(), verdicts.len(), "one verdict per letter");
        Self {
            word,
            verdicts,
            row,
            timestamp,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Attempt index (0-based) the guess was submitted at
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Letters paired with their verdicts, in position order
    pub fn tiles(&self) -> impl Iterator<Item = (char, Verdict)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .zip(self.verdicts.iter().copied())
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.verdicts.iter().all(|&v| v == Verdict::Correct)
    }
}
