//! Word list loading utilities
//!
//! Builds a `WordStore` from a file or from the embedded constant list.

use crate::core::{WordStore, WordStoreError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load words from a file, one word per line
///
/// # Errors
///
/// Returns `WordStoreError::Io` if the file cannot be opened or read, or
/// `WordStoreError::Empty` if it contains no words.
///
/// # Examples
/// ```no_run
/// use ineedideas::wordlists::loader::load_from_file;
///
/// let store = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, WordStoreError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordStoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    WordStore::from_reader(BufReader::new(file), path)
}

/// Convert an embedded string slice to a `WordStore`
///
/// # Examples
/// ```
/// use ineedideas::wordlists::loader::store_from_slice;
/// use ineedideas::wordlists::WORDS;
///
/// let store = store_from_slice(WORDS);
/// assert_eq!(store.len(), WORDS.len());
/// ```
#[must_use]
pub fn store_from_slice(slice: &[&str]) -> WordStore {
    slice.iter().map(|&s| s.to_string()).collect()
}

/// Load from `path` if given, otherwise use the embedded list
///
/// # Errors
///
/// Same as [`load_from_file`] when a path is given. The embedded list never fails.
pub fn load_store(path: Option<&Path>) -> Result<WordStore, WordStoreError> {
    match path {
        Some(path) => load_from_file(path),
        None => Ok(store_from_slice(crate::wordlists::WORDS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn store_from_slice_keeps_order() {
        let store = store_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(store.len(), 3);
        assert_eq!(store.words(), &["crane", "slate", "irate"]);
    }

    #[test]
    fn store_from_slice_empty() {
        let store = store_from_slice(&[]);
        assert!(store.is_empty());
    }

    #[test]
    fn load_from_file_reads_lines() {
        let file = word_file("hello\nworld\n");
        let store = load_from_file(file.path()).unwrap();

        assert_eq!(store.words(), &["hello", "world"]);
    }

    #[test]
    fn load_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let result = load_from_file(&missing);
        match result {
            Err(WordStoreError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_file_empty() {
        let file = word_file("");
        assert!(matches!(
            load_from_file(file.path()),
            Err(WordStoreError::Empty)
        ));
    }

    #[test]
    fn load_store_defaults_to_embedded() {
        let store = load_store(None).unwrap();
        assert_eq!(store.len(), crate::wordlists::WORDS_COUNT);
    }

    #[test]
    fn load_store_uses_path() {
        let file = word_file("hello\n");
        let store = load_store(Some(file.path())).unwrap();

        assert_eq!(store.words(), &["hello"]);
    }
}
