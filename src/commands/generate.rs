//! Generate command
//!
//! Writes `count` phrases to an output stream, one per line.

use crate::core::{GenerateConfig, WordStore};
use crate::generator::Generator;
use crate::output::write_phrase;
use rand::Rng;
use std::fmt;
use std::io::{self, Write};

/// Error type for a generation run
#[derive(Debug)]
pub enum GenerateError {
    /// Words were requested from a store that has none
    EmptyStore,
    /// Writing a phrase failed
    Io(io::Error),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStore => write!(f, "cannot sample words from an empty word list"),
            Self::Io(_) => write!(f, "failed to write phrase"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyStore => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for GenerateError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Generate `config.count()` phrases and write each on its own line
///
/// # Errors
///
/// Returns `GenerateError::EmptyStore` if a phrase needs words and the store is empty,
/// or `GenerateError::Io` if writing to `out` fails.
pub fn run_generate<R: Rng, W: Write>(
    generator: &mut Generator<R>,
    store: &WordStore,
    config: &GenerateConfig,
    out: &mut W,
) -> Result<(), GenerateError> {
    for _ in 0..config.count() {
        let phrase = generator
            .phrase(store, config)
            .ok_or(GenerateError::EmptyStore)?;
        write_phrase(out, &phrase)?;
    }

    Ok(())
}
