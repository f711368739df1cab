//! # word-combat
//!
//! A two-player, turn-based word duel engine.
//!
//! Each round a random combat mode decides which property of a word counts
//! (length, vowels, rare letters, palindromes, ...). Both players submit a
//! word, the higher-scoring word deals its damage to the other player, and
//! the match ends when someone's health reaches 0.
//!
//! ## Design Principles
//!
//! 1. **Pure scoring**: word analysis and damage are total functions with no
//!    side effects.
//!
//! 2. **Explicit state**: the used-word set, health and scores live in one
//!    `MatchState`, owned and mutated only by `MatchEngine`.
//!
//! 3. **Injected randomness**: mode selection draws from a seedable
//!    `GameRng`, so whole matches replay deterministically in tests.
//!
//! 4. **Presentation at arm's length**: the engine talks to front ends
//!    through the `Presenter` trait and never formats text or sleeps.
//!
//! ## Modules
//!
//! - `core`: players, state, rounds, RNG, configuration, errors
//! - `words`: word statistics, validation, used-word tracking
//! - `combat`: combat modes and damage formulas
//! - `rules`: the match engine and presenter seam

pub mod combat;
pub mod core;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    GameOverReason, GameRng, MatchConfig, MatchError, MatchState, MatchStatus, MatchSummary,
    Player, PlayerId, PlayerPair, RoundOutcome, RoundResult, Submission, WordError,
};

pub use crate::combat::{select_mode, CombatMode, DamageCalculator};

pub use crate::words::{analyze, validate, UsedWords, WordStats};

pub use crate::rules::{submit_word, MatchEngine, MatchEvent, Presenter};
