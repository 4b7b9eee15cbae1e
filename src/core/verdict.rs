//! Guess evaluation
//!
//! Compares a guess against the target and produces one verdict per letter,
//! following the standard rules for repeated letters:
//! - Correct: right letter in the right position
//! - Present: letter occurs elsewhere in an unconsumed target position
//! - Absent: no unconsumed occurrence left

use super::Word;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-letter verdict
///
/// Ordered by priority: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter not in word (gray)
    Absent,
    /// Letter in word, wrong position (yellow)
    Present,
    /// Letter in correct position (green)
    Correct,
}

impl Verdict {
    /// Share glyph for this verdict
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a verdict from a glyph or a letter code
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Evaluator contract violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("guess has {guess} letters but target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Result of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    verdicts: Vec<Verdict>,
    is_correct: bool,
    correct_count: usize,
    present_count: usize,
}

impl Evaluation {
    /// Verdicts in guess order
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Whether the guess equals the target
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Number of `Correct` verdicts
    #[inline]
    #[must_use]
    pub const fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Number of `Present` verdicts
    #[inline]
    #[must_use]
    pub const fn present_count(&self) -> usize {
        self.present_count
    }

    /// Emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.verdicts.iter().map(|v| v.glyph()).collect()
    }
}

/// Evaluate `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark exact position matches as Correct and consume that target position
/// 2. Second pass, left to right over the guess: for each remaining position take the
///    first unconsumed target occurrence of the letter (Present) or mark Absent
///
/// # Errors
/// Returns `EvaluationError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_rounds::core::{Verdict, Word, evaluate};
///
/// let guess = Word::new("lades", 5).unwrap();
/// let target = Word::new("kalem", 5).unwrap();
/// let evaluation = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(evaluation.to_emoji(), "🟨🟩⬜🟩⬜");
/// assert_eq!(evaluation.verdicts()[1], Verdict::Correct);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Evaluation, EvaluationError> {
    if guess.len() != target.len() {
        return Err(EvaluationError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_letters = guess.letters();
    let target_letters = target.letters();
    let mut verdicts = vec![Verdict::Absent; guess_letters.len()];
    let mut consumed = vec![false; target_letters.len()];

    for (i, (g, t)) in guess_letters.iter().zip(target_letters).enumerate() {
        if g == t {
            verdicts[i] = Verdict::Correct;
            consumed[i] = true;
        }
    }

    for (i, &letter) in guess_letters.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        let unused = target_letters
            .iter()
            .enumerate()
            .position(|(j, &t)| t == letter && !consumed[j]);
        if let Some(j) = unused {
            verdicts[i] = Verdict::Present;
            consumed[j] = true;
        }
    }

    let correct_count = verdicts.iter().filter(|&&v| v == Verdict::Correct).count();
    let present_count = verdicts.iter().filter(|&&v| v == Verdict::Present).count();

    Ok(Evaluation {
        verdicts,
        is_correct: guess == target,
        correct_count,
        present_count,
    })
}
