//! Combat modes and per-round mode selection.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Scoring rule for a round. Decides which word statistic drives damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatMode {
    Length,
    Vowels,
    Consonants,
    RareLetters,
    Palindrome,
    Alliteration,
    ScrabbleScore,
}

impl CombatMode {
    /// Every mode, in a fixed order.
    pub const ALL: [CombatMode; 7] = [
        CombatMode::Length,
        CombatMode::Vowels,
        CombatMode::Consonants,
        CombatMode::RareLetters,
        CombatMode::Palindrome,
        CombatMode::Alliteration,
        CombatMode::ScrabbleScore,
    ];

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CombatMode::Length => "LENGTH",
            CombatMode::Vowels => "VOWELS",
            CombatMode::Consonants => "CONSONANTS",
            CombatMode::RareLetters => "RARE LETTERS",
            CombatMode::Palindrome => "PALINDROME",
            CombatMode::Alliteration => "ALLITERATION",
            CombatMode::ScrabbleScore => "SCRABBLE SCORE",
        }
    }

    /// Human-readable rule shown to players. Plays no part in scoring.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            CombatMode::Length => "The LONGEST word wins!",
            CombatMode::Vowels => "The word with the most VOWELS wins!",
            CombatMode::Consonants => "The word with the most CONSONANTS wins!",
            CombatMode::RareLetters => "The word with the most RARE LETTERS wins!",
            CombatMode::Palindrome => "A PALINDROME earns a huge bonus!",
            CombatMode::Alliteration => "The word that repeats its first letter most wins!",
            CombatMode::ScrabbleScore => "The best SCRABBLE SCORE wins!",
        }
    }
}

impl std::fmt::Display for CombatMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Draw a mode uniformly at random. Draws are independent; repeats are allowed.
pub fn select_mode(rng: &mut GameRng) -> (CombatMode, &'static str) {
    let mode = CombatMode::ALL[rng.gen_range_usize(0..CombatMode::ALL.len())];
    (mode, mode.description())
}
