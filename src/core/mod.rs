//! Core match types: players, state, rounds, RNG, configuration, errors.
//!
//! Everything the match engine mutates lives in `MatchState`. Nothing here
//! performs I/O.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod round;
pub mod state;

pub use config::MatchConfig;
pub use error::{MatchError, WordError};
pub use player::{PlayerId, PlayerPair, PLAYER_COUNT};
pub use rng::GameRng;
pub use round::{RoundOutcome, RoundResult, Submission, Submissions};
pub use state::{
    GameOverReason, HealthBar, HealthTier, MatchState, MatchStatus, MatchSummary, Player,
};
