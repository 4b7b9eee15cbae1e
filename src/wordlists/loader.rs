//! Word source loading
//!
//! A word source is either the embedded list or a file. Files may be a JSON
//! array of strings or plain text with one word per line.

use super::WORDS;
use super::catalog::CatalogError;
use crate::core::Word;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the ordered word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// The list compiled into the binary
    Embedded,
    /// A `.json` array or newline-separated text file
    File(PathBuf),
}

impl WordSource {
    /// Interpret a CLI value: `embedded` or a path
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Read the raw entries of a source, in order
///
/// # Errors
///
/// Returns `CatalogError::Unavailable` if the file cannot be read or a JSON
/// source is malformed.
pub fn read_entries(source: &WordSource) -> Result<Vec<String>, CatalogError> {
    match source {
        WordSource::Embedded => Ok(WORDS.iter().map(|&w| w.to_string()).collect()),
        WordSource::File(path) => read_file(path),
    }
}

fn read_file(path: &Path) -> Result<Vec<String>, CatalogError> {
    let content = fs::read_to_string(path)
        .map_err(|e| CatalogError::Unavailable(format!("{}: {e}", path.display())))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        || content.trim_start().starts_with('[');

    if is_json {
        serde_json::from_str::<Vec<String>>(&content)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {e}", path.display())))
    } else {
        Ok(parse_lines(&content))
    }
}

/// Split text into trimmed, non-empty lines
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert raw entries to words of `length` letters
///
/// Returns the valid words in order and the number of skipped entries.
///
/// # Examples
/// ```
/// use wordle_rounds::wordlists::loader::words_from_slice;
///
/// let (words, skipped) = words_from_slice(&["crane", "toolong", "SLATE"], 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(skipped, 1);
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S], length: usize) -> (Vec<Word>, usize) {
    let words: Vec<Word> = slice
        .iter()
        .filter_map(|s| Word::new(s.as_ref(), length).ok())
        .collect();
    let skipped = slice.len() - words.len();
    (words, skipped)
}
