//! Damage formulas.
//!
//! ```text
//! damage = min(cap, base + mode_term(stats) + long_word_bonus?)
//! ```
//!
//! | mode          | term                        |
//! |---------------|-----------------------------|
//! | Length        | 3 × length                  |
//! | Vowels        | 5 × vowels                  |
//! | Consonants    | 4 × consonants              |
//! | RareLetters   | 8 × rare letters            |
//! | Palindrome    | 30 if palindrome, else 0    |
//! | Alliteration  | 6 × alliteration count      |
//! | ScrabbleScore | 2 × scrabble score          |

use super::mode::CombatMode;
use crate::core::MatchConfig;
use crate::words::WordStats;

/// Flat bonus for a palindrome in palindrome mode.
pub const PALINDROME_BONUS: u32 = 30;

/// Maps (mode, stats) to damage. Total over all inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageCalculator {
    base: u32,
    cap: u32,
    long_word_length: usize,
    long_word_bonus: u32,
}

impl Default for DamageCalculator {
    fn default() -> Self {
        Self::new(&MatchConfig::default())
    }
}

impl DamageCalculator {
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            base: config.base_damage,
            cap: config.damage_cap,
            long_word_length: config.long_word_length,
            long_word_bonus: config.long_word_bonus,
        }
    }

    /// The mode-specific additive term, before base damage and bonuses.
    #[must_use]
    pub fn mode_term(mode: CombatMode, stats: &WordStats) -> u32 {
        let scaled = |count: usize, factor: u32| (count as u32).saturating_mul(factor);

        match mode {
            CombatMode::Length => scaled(stats.length, 3),
            CombatMode::Vowels => scaled(stats.vowel_count, 5),
            CombatMode::Consonants => scaled(stats.consonant_count, 4),
            CombatMode::RareLetters => scaled(stats.rare_letter_count, 8),
            CombatMode::Palindrome => {
                if stats.is_palindrome {
                    PALINDROME_BONUS
                } else {
                    0
                }
            }
            CombatMode::Alliteration => scaled(stats.alliteration_count, 6),
            CombatMode::ScrabbleScore => stats.scrabble_score.saturating_mul(2),
        }
    }

    /// Damage dealt by a word under `mode`. The cap applies after every bonus.
    #[must_use]
    pub fn compute(&self, mode: CombatMode, stats: &WordStats) -> u32 {
        let mut damage = self.base.saturating_add(Self::mode_term(mode, stats));

        if stats.length >= self.long_word_length {
            damage = damage.saturating_add(self.long_word_bonus);
        }

        damage.min(self.cap)
    }
}
