//! Core domain types
//!
//! Words, verdicts, guess records and the derived keyboard view.
//! Everything here is pure: no clock, no I/O, no randomness.

mod guess;
mod keyboard;
mod verdict;
mod word;

pub use guess::GuessRecord;
pub use keyboard::{KeyboardState, aggregate};
pub use verdict::{Evaluation, EvaluationError, Verdict, evaluate};
pub use word::{Word, WordError};
