//! Word store
//!
//! An owned, read-only collection of candidate words that phrases are sampled from.

use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Collection of words available for sampling
///
/// Built once at startup from a file or the embedded list and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStore {
    words: Vec<String>,
}

/// Error type for word store loading
#[derive(Debug)]
pub enum WordStoreError {
    /// The word source could not be opened or read
    Io { path: PathBuf, source: io::Error },
    /// The word source contained no words
    Empty,
}

impl fmt::Display for WordStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "failed to load words from {}", path.display()),
            Self::Empty => write!(f, "failed to load words: word list is empty"),
        }
    }
}

impl std::error::Error for WordStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl WordStore {
    /// Create a store from already-owned words
    ///
    /// # Examples
    /// ```
    /// use ineedideas::core::WordStore;
    ///
    /// let store = WordStore::new(vec!["apple".to_string(), "pear".to_string()]);
    /// assert_eq!(store.len(), 2);
    /// ```
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Read newline-delimited words from a reader
    ///
    /// The trailing line terminator is stripped from every line and blank lines are skipped.
    /// The `path` is only used to label I/O errors.
    ///
    /// # Errors
    ///
    /// Returns `WordStoreError::Io` if reading fails, or `WordStoreError::Empty` if
    /// the reader produced no words.
    pub fn from_reader<R: BufRead>(
        reader: R,
        path: impl Into<PathBuf>,
    ) -> Result<Self, WordStoreError> {
        let path = path.into();
        let mut words = Vec::new();

        for line in reader.lines() {
            let line = line.map_err(|source| WordStoreError::Io {
                path: path.clone(),
                source,
            })?;
            let word = line.trim_end_matches('\r');
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        if words.is_empty() {
            return Err(WordStoreError::Empty);
        }

        Ok(Self { words })
    }

    /// Pick one word uniformly at random
    ///
    /// Returns `None` if the store is empty.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// Number of stored words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the store holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All stored words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the stored words
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl FromIterator<String> for WordStore {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
