//! Word catalog
//!
//! The ordered list of playable words. Order matters: round `i` plays
//! `words[i mod len]`. Membership checks go through a hash index.

use super::loader::{WordSource, read_entries, words_from_slice};
use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::debug;

/// Catalog failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The source is missing, unreadable, malformed or has no usable words
    #[error("word catalog unavailable: {0}")]
    Unavailable(String),
    /// Word selection on an empty catalog
    #[error("word catalog is empty")]
    Empty,
}

/// Ordered, read-only word list with a membership index
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<Word>,
    index: FxHashSet<String>,
    word_length: usize,
}

impl WordCatalog {
    /// Build a catalog from already validated words
    ///
    /// An empty catalog is allowed here; selecting a word from it fails.
    #[must_use]
    pub fn new(words: Vec<Word>, word_length: usize) -> Self {
        let index = words.iter().map(|w| w.text().to_string()).collect();
        Self {
            words,
            index,
            word_length,
        }
    }

    /// Build a catalog from raw strings, skipping entries that are not valid words
    #[must_use]
    pub fn from_strs<S: AsRef<str>>(entries: &[S], word_length: usize) -> Self {
        let (words, _) = words_from_slice(entries, word_length);
        Self::new(words, word_length)
    }

    /// Load a catalog from a word source
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Unavailable` if the source cannot be read or
    /// contains no valid words of `word_length` letters.
    pub fn load(source: &WordSource, word_length: usize) -> Result<Self, CatalogError> {
        let entries = read_entries(source)?;
        let (words, skipped) = words_from_slice(&entries, word_length);

        if words.is_empty() {
            return Err(CatalogError::Unavailable(format!(
                "no valid {word_length}-letter words in {source:?}"
            )));
        }

        debug!(
            words = words.len(),
            skipped,
            word_length,
            "loaded word catalog"
        );
        Ok(Self::new(words, word_length))
    }

    /// Target word for a 0-based round index
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if the catalog has no words.
    pub fn word_for_round(&self, index: u64) -> Result<&Word, CatalogError> {
        if self.words.is_empty() {
            return Err(CatalogError::Empty);
        }
        let position = (index % self.words.len() as u64) as usize;
        Ok(&self.words[position])
    }

    /// Whether a candidate normalizes to an exact catalog member
    #[must_use]
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.trim().to_lowercase())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
