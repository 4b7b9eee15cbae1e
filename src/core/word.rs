//! Word representation
//!
//! A `Word` is a normalized (lowercased) sequence of letters of a fixed,
//! configured length. Letters are Unicode code points, so alphabets beyond
//! ASCII (e.g. Turkish `ğ`, `ş`, `ı`) are first-class.

use rustc_hash::FxHashMap;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// A normalized word of `len()` letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The letter count is not exactly `length`
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use wordle_rounds::core::Word;
    ///
    /// let word = Word::new("CRANE", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();
        let letters: Vec<char> = text.chars().collect();

        if letters.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: letters.len(),
            });
        }

        if !letters.iter().all(|c| c.is_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word of non-zero configured length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> char {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct letters in first-occurrence order
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut seen = Vec::with_capacity(self.letters.len());
        for &ch in &self.letters {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
