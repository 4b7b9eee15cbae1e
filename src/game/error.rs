//! Round session errors
//!
//! Input and hint rejections are recoverable: the session is left exactly as
//! it was before the call.

use crate::config::ConfigError;
use crate::core::EvaluationError;
use crate::wordlists::CatalogError;
use thiserror::Error;

/// Failure to produce a round at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("configured word length {config} does not match catalog word length {catalog}")]
    WordLengthMismatch { config: usize, catalog: usize },
}

/// Rejected keyboard or submit input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("the round is over")]
    NotActive,
    #[error("the row is already full")]
    RowFull,
    #[error("nothing to delete")]
    NothingToDelete,
    #[error("guess must be {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("the submitted row has not advanced yet")]
    RowPending,
    #[error("no submitted row is waiting to advance")]
    NoPendingRow,
    /// A guess reached the evaluator with the wrong length
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}

impl InputError {
    /// Whether the UI should shake the current row
    #[must_use]
    pub const fn should_shake(&self) -> bool {
        matches!(self, Self::InvalidLength { .. } | Self::InvalidWord(_))
    }
}

/// Hint request that produced no letter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("hint letter '{0}' was already found")]
    AlreadyFound(char),
    #[error("every letter of the word has already been guessed")]
    AllRevealed,
    #[error("the round is over")]
    NotActive,
}
