//! Phrase generation engine
//!
//! Owns the random number generator and turns a word store plus a validated config
//! into phrases.

use super::Phrase;
use crate::core::{GenerateConfig, WordStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Phrase generator
///
/// The RNG is seeded once at construction and owned for the generator's lifetime.
pub struct Generator<R: Rng> {
    rng: R,
}

impl Generator<StdRng> {
    /// Create a generator with a deterministic seed
    ///
    /// The same seed always yields the same phrases for the same store and config.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Generator<R> {
    /// Create a generator from any RNG
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw the number of words for the next phrase
    ///
    /// Uniform over `lower..=upper`. Equal bounds always give exactly `lower`
    /// without consuming randomness.
    pub fn phrase_len(&mut self, config: &GenerateConfig) -> usize {
        if config.lower() == config.upper() {
            return config.lower();
        }
        self.rng.random_range(config.lower()..=config.upper())
    }

    /// Generate one phrase, sampling words with replacement
    ///
    /// Returns `None` if a word is needed but the store is empty.
    pub fn phrase<'s>(
        &mut self,
        store: &'s WordStore,
        config: &GenerateConfig,
    ) -> Option<Phrase<'s>> {
        let len = self.phrase_len(config);

        (0..len)
            .map(|_| store.sample(&mut self.rng))
            .collect::<Option<Vec<_>>>()
            .map(Phrase::new)
    }
}
