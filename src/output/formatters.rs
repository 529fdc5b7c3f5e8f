//! Formatting utilities for terminal output

use crate::core::GenerateConfig;

/// Informational line printed before generation starts
#[must_use]
pub fn status_line(config: &GenerateConfig) -> String {
    format!(
        "Generating {} with lower at least {} words and at most {} words",
        config.count(),
        config.lower(),
        config.upper()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_defaults() {
        let config = GenerateConfig::new(1, 5, 1).unwrap();
        assert_eq!(
            status_line(&config),
            "Generating 1 with lower at least 1 words and at most 5 words"
        );
    }

    #[test]
    fn status_line_custom() {
        let config = GenerateConfig::new(2, 7, 30).unwrap();
        assert_eq!(
            status_line(&config),
            "Generating 30 with lower at least 2 words and at most 7 words"
        );
    }
}
