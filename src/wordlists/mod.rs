//! Word lists for idea generation
//!
//! Provides an embedded word list compiled into the binary, plus loading from files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Embedded list contains an empty word");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 322, "Expected 322 embedded words");
    }
}
