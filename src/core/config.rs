//! Match configuration.
//!
//! Every tunable constant of the game lives here. `MatchConfig::default()`
//! gives the standard rules: 100 health, base damage 10, a +10 bonus for
//! words of 8+ letters, damage capped at 50, words of at least 2 letters.

use serde::{Deserialize, Serialize};

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Health each player starts with.
    pub starting_health: u32,

    /// Damage every accepted word deals before the mode term.
    pub base_damage: u32,

    /// Upper bound on the damage of a single word (applied last).
    pub damage_cap: u32,

    /// Words at least this long earn `long_word_bonus`.
    pub long_word_length: usize,

    /// Flat bonus for long words, regardless of mode.
    pub long_word_bonus: u32,

    /// Shortest acceptable word.
    pub min_word_length: usize,

    /// Seed for mode selection.
    /// Same seed produces the same sequence of combat modes.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            base_damage: 10,
            damage_cap: 50,
            long_word_length: 8,
            long_word_bonus: 10,
            min_word_length: 2,
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Set the starting health.
    ///
    /// # Panics
    ///
    /// Panics if `health` is zero: a match must start with both players alive.
    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        assert!(health > 0, "Starting health must be positive");
        self.starting_health = health;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the damage cap.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is below `base_damage`.
    #[must_use]
    pub fn with_damage_cap(mut self, cap: u32) -> Self {
        assert!(cap >= self.base_damage, "Damage cap must be at least the base damage");
        self.damage_cap = cap;
        self
    }

    /// Set the minimum word length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }
}
