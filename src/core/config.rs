//! Engine configuration.
//!
//! The rule set itself is fixed. Configuration only covers how the engine
//! is driven:
//! - `seed`: deterministic shuffles for tests and replays
//! - `opponent_delay_ms`: the pause before the automated opponent acts
//!
//! ```
//! use crazy_eights::core::EngineConfig;
//!
//! let config = EngineConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.opponent_delay_ms, 1000);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::Error;

/// Cards dealt to each player at the start of a game.
pub const INITIAL_HAND_SIZE: usize = 8;

/// Default pause before the automated opponent acts.
pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 1000;

/// Host-side engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Milliseconds between the opponent's turn starting and its move.
    pub opponent_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The opponent delay as a `Duration`.
    #[must_use]
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.opponent_delay_ms, DEFAULT_OPPONENT_DELAY_MS);
        assert_eq!(config.opponent_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_seed(42)
            .with_opponent_delay(Duration::from_millis(250));

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.opponent_delay_ms, 250);
    }

    #[test]
    fn test_from_json() {
        let config = EngineConfig::from_json(r#"{"seed": 3, "opponent_delay_ms": 0}"#).unwrap();
        assert_eq!(config, EngineConfig::new().with_seed(3).with_opponent_delay(Duration::ZERO));

        let empty = EngineConfig::from_json("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(EngineConfig::from_json("not json"), Err(Error::Config(_))));
        assert!(matches!(
            EngineConfig::from_json(r#"{"hand_size": 5}"#),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"opponent_delay_ms": -1}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::new().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
