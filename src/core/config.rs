//! Session configuration.
//!
//! Pacing values are hints for the scheduling collaborator; the engine itself
//! never sleeps.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pause before the Evolutionist turn starts (default: 1000 ms).
    pub ai_turn_delay_ms: u64,

    /// Pause between consecutive AI pieces (default: 500 ms).
    pub ai_piece_delay_ms: u64,

    /// Run the Fire claim traversal whenever moves are generated (default: true).
    /// Turning this off makes move generation a pure query.
    pub claim_on_generate: bool,

    /// Seed for randomized move selectors.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_turn_delay_ms: 1000,
            ai_piece_delay_ms: 500,
            claim_on_generate: true,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Config with zero pacing, for tests and headless runs.
    #[must_use]
    pub fn headless() -> Self {
        Self::default().with_ai_turn_delay_ms(0).with_ai_piece_delay_ms(0)
    }

    pub fn with_ai_turn_delay_ms(mut self, ms: u64) -> Self {
        self.ai_turn_delay_ms = ms;
        self
    }

    pub fn with_ai_piece_delay_ms(mut self, ms: u64) -> Self {
        self.ai_piece_delay_ms = ms;
        self
    }

    pub fn with_claim_on_generate(mut self, claim: bool) -> Self {
        self.claim_on_generate = claim;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn ai_turn_delay(&self) -> Duration {
        Duration::from_millis(self.ai_turn_delay_ms)
    }

    #[must_use]
    pub fn ai_piece_delay(&self) -> Duration {
        Duration::from_millis(self.ai_piece_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.ai_turn_delay(), Duration::from_secs(1));
        assert_eq!(config.ai_piece_delay(), Duration::from_millis(500));
        assert!(config.claim_on_generate);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_headless_has_no_pacing() {
        let config = SessionConfig::headless();
        assert_eq!(config.ai_turn_delay(), Duration::ZERO);
        assert_eq!(config.ai_piece_delay(), Duration::ZERO);
        assert!(config.claim_on_generate);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_claim_on_generate(false)
            .with_seed(7);
        assert!(!config.claim_on_generate);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_serialization() {
        let config = SessionConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
