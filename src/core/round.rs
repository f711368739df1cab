//! Round records: what each player submitted and how the round resolved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::{PlayerId, PlayerPair};
use crate::combat::CombatMode;
use crate::words::WordStats;

/// An accepted word, scored under the round's mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub player: PlayerId,
    /// Normalized (lowercase) word.
    pub word: String,
    pub stats: WordStats,
    pub damage: u32,
}

/// Submissions for one round. At most one per player.
pub type Submissions = SmallVec<[Submission; 2]>;

/// How a round was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Strictly higher damage wins; the loser takes the winner's damage.
    Victory {
        winner: PlayerId,
        loser: PlayerId,
        damage: u32,
    },
    /// Equal damage: each player hits the other for half their own damage.
    Tie,
    /// Only one player was still standing, so nobody was hit.
    Uncontested { player: PlayerId },
}

/// Result of a resolved round, as reported to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number this outcome belongs to (1-based).
    pub round: u32,
    pub mode: CombatMode,
    pub result: RoundResult,
    pub submissions: Submissions,
    /// Damage dealt to each player this round, before clamping health at 0.
    pub damage_taken: PlayerPair<u32>,
    /// Points each player gained this round.
    pub score_delta: PlayerPair<u32>,
}

impl RoundOutcome {
    /// The round winner, if the round had one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.result {
            RoundResult::Victory { winner, .. } => Some(winner),
            RoundResult::Tie | RoundResult::Uncontested { .. } => None,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.result == RoundResult::Tie
    }

    /// The submission made by `player`, if any.
    #[must_use]
    pub fn submission(&self, player: PlayerId) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.player == player)
    }
}
