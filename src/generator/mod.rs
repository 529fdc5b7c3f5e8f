//! Phrase generation
//!
//! The generator engine, the phrase type and seeding helpers.

mod engine;
mod phrase;

pub use engine::Generator;
pub use phrase::Phrase;

use std::time::{SystemTime, UNIX_EPOCH};

/// Seed derived from the wall clock, in whole seconds since the Unix epoch
///
/// Falls back to 0 if the clock is set before the epoch.
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_seed_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(clock_seed() > 1_577_836_800);
    }
}
