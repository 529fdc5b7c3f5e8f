//! Generated phrase

use std::fmt;

/// One generated "idea": an ordered list of words borrowed from a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phrase<'a> {
    words: Vec<&'a str>,
}

impl<'a> Phrase<'a> {
    #[must_use]
    pub const fn new(words: Vec<&'a str>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Words separated by single spaces, no trailing space
impl fmt::Display for Phrase<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = self.words.iter();
        if let Some(first) = words.next() {
            f.write_str(first)?;
            for word in words {
                write!(f, " {word}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_with_spaces() {
        let phrase = Phrase::new(vec!["brave", "little", "toaster"]);
        assert_eq!(phrase.to_string(), "brave little toaster");
    }

    #[test]
    fn display_single_word() {
        let phrase = Phrase::new(vec!["hello"]);
        assert_eq!(format!("{phrase}"), "hello");
    }

    #[test]
    fn display_empty() {
        let phrase = Phrase::default();
        assert!(phrase.is_empty());
        assert_eq!(phrase.to_string(), "");
    }

    #[test]
    fn len_counts_repeats() {
        let phrase = Phrase::new(vec!["echo", "echo", "echo"]);
        assert_eq!(phrase.len(), 3);
    }
}
