//! Table configuration and fixed game constants.
//!
//! The rules themselves are not configurable: deck size, hand size and the
//! number of books are constants. `TableConfig` only covers pacing and
//! seeding, which the presentation layer cares about.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt to each seat at game start.
pub const HAND_SIZE: usize = 7;

/// Cards of one rank that make a book.
pub const BOOK_SIZE: usize = 4;

/// Books available in one deck (one per rank).
pub const TOTAL_BOOKS: usize = 13;

/// Pacing and seeding for a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// How long a transient notification stays active.
    pub message_duration: Duration,

    /// Artificial delay before the scripted opponent moves.
    pub opponent_delay: Duration,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            message_duration: Duration::from_millis(1500),
            opponent_delay: Duration::from_millis(900),
            seed: None,
        }
    }
}

impl TableConfig {
    /// Set the transient notification display time.
    pub fn with_message_duration(mut self, duration: Duration) -> Self {
        self.message_duration = duration;
        self
    }

    /// Set the scripted opponent's thinking delay.
    pub fn with_opponent_delay(mut self, delay: Duration) -> Self {
        self.opponent_delay = delay;
        self
    }

    /// Use a fixed seed for reproducible games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.message_duration, Duration::from_millis(1500));
        assert_eq!(config.opponent_delay, Duration::from_millis(900));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_message_duration(Duration::from_secs(2))
            .with_opponent_delay(Duration::ZERO)
            .with_seed(7);

        assert_eq!(config.message_duration, Duration::from_secs(2));
        assert_eq!(config.opponent_delay, Duration::ZERO);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_constants_are_consistent() {
        assert_eq!(TOTAL_BOOKS * BOOK_SIZE, DECK_SIZE);
        assert!(2 * HAND_SIZE < DECK_SIZE);
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
