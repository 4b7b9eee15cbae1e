//! One-off guess evaluation

use crate::core::{Evaluation, EvaluationError, Word, WordError, evaluate};
use serde::Serialize;
use thiserror::Error;

/// Why a pair of words could not be compared
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error("invalid guess: {0}")]
    Guess(WordError),
    #[error("invalid target: {0}")]
    Target(WordError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

/// Evaluation of a guess against an arbitrary target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluateResult {
    pub guess: String,
    pub target: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

/// Evaluate `guess` against `target`; both must have `word_length` letters
///
/// # Errors
///
/// Returns `EvaluateError` if either word is not a valid word of that length.
pub fn evaluate_words(guess: &str, target: &str, word_length: usize) -> Result<EvaluateResult, EvaluateError> {
    let guess = Word::new(guess, word_length).map_err(EvaluateError::Guess)?;
    let target = Word::new(target, word_length).map_err(EvaluateError::Target)?;
    let evaluation = evaluate(&guess, &target)?;

    Ok(EvaluateResult {
        guess: guess.text().to_string(),
        target: target.text().to_string(),
        evaluation,
    })
}
