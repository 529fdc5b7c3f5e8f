//! Command-line options and their validation
//!
//! `Options` holds the raw parsed values; `GenerateConfig` is the validated form the
//! generator consumes.

use std::fmt;
use std::path::PathBuf;

/// Default minimum number of words per phrase
pub const DEFAULT_LOWER: i64 = 1;
/// Default maximum number of words per phrase
pub const DEFAULT_UPPER: i64 = 5;
/// Default number of phrases to generate
pub const DEFAULT_COUNT: i64 = 1;

/// Raw options as parsed from the command line
///
/// No range checks have been applied yet; see [`Options::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub help: bool,
    pub lower: i64,
    pub upper: i64,
    pub count: i64,
    pub wordlist: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            help: false,
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            count: DEFAULT_COUNT,
            wordlist: None,
            seed: None,
        }
    }
}

/// Validated generation parameters
///
/// Invariant: `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    lower: usize,
    upper: usize,
    count: usize,
}

/// Error type for invalid options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A bound or count was below zero
    Negative { name: &'static str },
    /// The lower bound exceeded the upper bound
    LowerAboveUpper,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { name } => write!(f, "{name} must be greater than or equal to 0"),
            Self::LowerAboveUpper => write!(f, "lower bound must be less than upper bound"),
        }
    }
}

impl std::error::Error for OptionsError {}

fn non_negative(value: i64, name: &'static str) -> Result<usize, OptionsError> {
    usize::try_from(value).map_err(|_| OptionsError::Negative { name })
}

impl Options {
    /// Check the numeric options and produce a `GenerateConfig`
    ///
    /// Checks run in a fixed order: count, lower, upper, then `lower <= upper`.
    /// The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Negative` naming the first negative option, or
    /// `OptionsError::LowerAboveUpper` if `lower > upper`.
    ///
    /// # Examples
    /// ```
    /// use ineedideas::core::{Options, OptionsError};
    ///
    /// let config = Options::default().validate().unwrap();
    /// assert_eq!((config.lower(), config.upper(), config.count()), (1, 5, 1));
    ///
    /// let options = Options { lower: 6, ..Options::default() };
    /// assert_eq!(options.validate(), Err(OptionsError::LowerAboveUpper));
    /// ```
    pub fn validate(&self) -> Result<GenerateConfig, OptionsError> {
        let count = non_negative(self.count, "count")?;
        let lower = non_negative(self.lower, "lower")?;
        let upper = non_negative(self.upper, "upper")?;

        GenerateConfig::new(lower, upper, count)
    }
}

impl GenerateConfig {
    /// Create a config from already non-negative values
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::LowerAboveUpper` if `lower > upper`.
    pub const fn new(lower: usize, upper: usize, count: usize) -> Result<Self, OptionsError> {
        if lower > upper {
            return Err(OptionsError::LowerAboveUpper);
        }
        Ok(Self {
            lower,
            upper,
            count,
        })
    }

    /// Minimum number of words per phrase (inclusive)
    #[inline]
    #[must_use]
    pub const fn lower(&self) -> usize {
        self.lower
    }

    /// Maximum number of words per phrase (inclusive)
    #[inline]
    #[must_use]
    pub const fn upper(&self) -> usize {
        self.upper
    }

    /// Number of phrases to generate
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }
}
