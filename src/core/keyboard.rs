//! Keyboard feedback aggregation
//!
//! Folds every verdict of every guess into the best-known verdict per letter.

use super::{GuessRecord, Verdict};
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Best-known verdict per letter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyboardState(FxHashMap<char, Verdict>);

impl KeyboardState {
    /// Verdict for a letter, if it has been guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Verdict> {
        self.0.get(&letter).copied()
    }

    /// Number of letters with a known verdict
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters with a known verdict, in no particular order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.keys().copied()
    }

    /// Record a verdict, keeping the highest priority one
    pub fn record(&mut self, letter: char, verdict: Verdict) {
        self.0
            .entry(letter)
            .and_modify(|known| *known = (*known).max(verdict))
            .or_insert(verdict);
    }
}

/// Aggregate the full guess history
///
/// Priority is `Correct > Present > Absent`; a letter is never downgraded.
#[must_use]
pub fn aggregate(guesses: &[GuessRecord]) -> KeyboardState {
    let mut state = KeyboardState::default();
    for guess in guesses {
        for (letter, verdict) in guess.tiles() {
            state.record(letter, verdict);
        }
    }
    state
}
