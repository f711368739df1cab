//! Presentation-layer seam.
//!
//! The engine never formats text or waits. It reports what happened through
//! `Presenter::present` and asks for words through `Presenter::request_word`.
//! Both may block on the user, and both may return `MatchError::Cancelled`
//! to abort the match on the spot.

use crate::combat::CombatMode;
use crate::core::error::Result;
use crate::core::{
    GameOverReason, MatchState, MatchSummary, PlayerId, RoundOutcome, Submission, WordError,
};

/// Something the presentation layer may want to show.
#[derive(Clone, Copy, Debug)]
pub enum MatchEvent<'a> {
    /// Setup is done; both players are at full health.
    MatchStarted { state: &'a MatchState },

    /// A new round begins under `mode`.
    RoundStarted {
        round: u32,
        mode: CombatMode,
        description: &'static str,
        state: &'a MatchState,
    },

    /// A word was refused. The player will be asked again.
    WordRejected { player: PlayerId, error: &'a WordError },

    /// A word was accepted and scored.
    WordAccepted { submission: &'a Submission },

    /// The round was resolved and the state updated.
    RoundResolved {
        outcome: &'a RoundOutcome,
        state: &'a MatchState,
    },

    /// The match has ended.
    MatchOver {
        reason: GameOverReason,
        summary: &'a MatchSummary,
    },
}

/// Display and input provider driven by the match engine.
pub trait Presenter {
    /// Show an event.
    fn present(&mut self, event: &MatchEvent<'_>) -> Result<()>;

    /// Ask `player` for a word. Returns the raw input; validation is the
    /// engine's job.
    fn request_word(&mut self, player: PlayerId, name: &str, mode: CombatMode) -> Result<String>;
}
