//! Word lists
//!
//! The embedded default list, file loading, and the `WordCatalog` that
//! selects round targets and validates guesses.

pub mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, WordCatalog};
pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(char::is_lowercase),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}
