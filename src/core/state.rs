//! Match state: players, round counter, used words and history.
//!
//! ## Invariants
//!
//! - Health never goes below 0 and never increases.
//! - The match is over iff at least one player's health is 0.
//! - `round_number` starts at 1 and grows by exactly 1 per resolved round.
//! - Used words are append-only.
//!
//! History uses `im::Vector` so snapshots of the state clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::config::MatchConfig;
use super::player::{PlayerId, PlayerPair};
use super::round::{RoundOutcome, RoundResult, Submission, Submissions};
use crate::combat::CombatMode;
use crate::words::UsedWords;

/// Number of cells in a rendered health bar.
pub const HEALTH_BAR_WIDTH: usize = 20;

/// How many used words the end-of-match summary lists.
pub const SUMMARY_WORD_SAMPLE: usize = 10;

/// One combatant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, fixed at setup.
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    /// Rounds won.
    pub score: u32,
}

impl Player {
    fn new(name: impl Into<String>, health: u32) -> Self {
        Self {
            name: name.into(),
            health,
            max_health: health,
            score: 0,
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Health as bar data. Colouring is up to the presentation layer.
    #[must_use]
    pub fn health_bar(&self) -> HealthBar {
        let filled = if self.max_health == 0 {
            0
        } else {
            (HEALTH_BAR_WIDTH as u64 * self.health as u64 / self.max_health as u64) as usize
        };
        let percent = if self.max_health == 0 {
            0
        } else {
            (self.health as u64 * 100 / self.max_health as u64) as u32
        };
        let tier = match percent {
            p if p > 70 => HealthTier::Healthy,
            p if p > 30 => HealthTier::Wounded,
            _ => HealthTier::Critical,
        };

        HealthBar {
            filled: filled.min(HEALTH_BAR_WIDTH),
            width: HEALTH_BAR_WIDTH,
            tier,
        }
    }
}

/// Health severity band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthTier {
    Healthy,
    Wounded,
    Critical,
}

/// Health bar cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBar {
    pub filled: usize,
    pub width: usize,
    pub tier: HealthTier,
}

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The given player is the last one standing.
    Victory(PlayerId),
    /// Both players fell in the same round.
    DoubleKnockout,
}

impl GameOverReason {
    /// The match winner, if there is one.
    #[must_use]
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameOverReason::Victory(p) => Some(p),
            GameOverReason::DoubleKnockout => None,
        }
    }
}

/// Match lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    GameOver(GameOverReason),
}

/// End-of-match report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub names: PlayerPair<String>,
    pub scores: PlayerPair<u32>,
    pub health: PlayerPair<u32>,
    pub rounds_played: u32,
    pub words_used: usize,
    /// The first few words played, in order.
    pub sample_words: Vec<String>,
    /// `None` if the match was cut short.
    pub reason: Option<GameOverReason>,
}

/// Complete state of one match.
///
/// Created once at setup, mutated only by the match engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchState {
    players: PlayerPair<Player>,
    round_number: u32,
    used_words: UsedWords,
    history: Vector<RoundOutcome>,
}

impl MatchState {
    /// Create a new match with both players at full health.
    ///
    /// Names are taken as given; substituting placeholders for empty input
    /// is the presentation layer's job.
    #[must_use]
    pub fn new(names: [String; 2], config: &MatchConfig) -> Self {
        let [first, second] = names;
        Self {
            players: PlayerPair::from_values(
                Player::new(first, config.starting_health),
                Player::new(second, config.starting_health),
            ),
            round_number: 1,
            used_words: UsedWords::new(),
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// Current round (1-based). After the match ends, one past the last round.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn used_words(&self) -> &UsedWords {
        &self.used_words
    }

    /// Resolved rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundOutcome> {
        &self.history
    }

    /// Players with health left, in seat order.
    pub fn alive_players(&self) -> SmallVec<[PlayerId; 2]> {
        self.players
            .iter()
            .filter(|(_, p)| p.is_alive())
            .map(|(id, _)| id)
            .collect()
    }

    // === Game over ===

    #[must_use]
    pub fn status(&self) -> MatchStatus {
        let first = self.players[PlayerId::FIRST].is_alive();
        let second = self.players[PlayerId::SECOND].is_alive();

        match (first, second) {
            (true, true) => MatchStatus::InProgress,
            (true, false) => MatchStatus::GameOver(GameOverReason::Victory(PlayerId::FIRST)),
            (false, true) => MatchStatus::GameOver(GameOverReason::Victory(PlayerId::SECOND)),
            (false, false) => MatchStatus::GameOver(GameOverReason::DoubleKnockout),
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status() != MatchStatus::InProgress
    }

    /// Why the match ended, or `None` while it is still in progress.
    #[must_use]
    pub fn winner_reason(&self) -> Option<GameOverReason> {
        match self.status() {
            MatchStatus::InProgress => None,
            MatchStatus::GameOver(reason) => Some(reason),
        }
    }

    // === Mutation ===

    /// Record an accepted word. Returns `false` if it was already used.
    pub(crate) fn mark_used(&mut self, word: &str) -> bool {
        self.used_words.insert(word)
    }

    /// Apply one round's submissions and advance the round counter.
    ///
    /// # Panics
    ///
    /// Panics if `submissions` is empty, holds more than two entries, or
    /// holds two entries for the same player.
    pub fn resolve_round(&mut self, mode: CombatMode, submissions: Submissions) -> RoundOutcome {
        assert!(
            !submissions.is_empty() && submissions.len() <= 2,
            "A round needs one or two submissions"
        );

        let mut damage_taken = PlayerPair::with_value(0u32);
        let mut score_delta = PlayerPair::with_value(0u32);

        let result = match submissions.as_slice() {
            [a, b] => {
                assert_ne!(a.player, b.player, "Each player submits at most once per round");
                Self::duel(a, b, &mut damage_taken, &mut score_delta)
            }
            [only] => RoundResult::Uncontested { player: only.player },
            _ => unreachable!(),
        };

        for (id, player) in self.players.iter_mut() {
            player.take_damage(damage_taken[id]);
            player.score += score_delta[id];
        }

        let outcome = RoundOutcome {
            round: self.round_number,
            mode,
            result,
            submissions,
            damage_taken,
            score_delta,
        };

        debug!(round = self.round_number, ?result, "round resolved");

        self.round_number += 1;
        self.history.push_back(outcome.clone());
        outcome
    }

    fn duel(
        a: &Submission,
        b: &Submission,
        damage_taken: &mut PlayerPair<u32>,
        score_delta: &mut PlayerPair<u32>,
    ) -> RoundResult {
        if a.damage == b.damage {
            damage_taken[b.player] = a.damage / 2;
            damage_taken[a.player] = b.damage / 2;
            return RoundResult::Tie;
        }

        let (winner, loser) = if a.damage > b.damage { (a, b) } else { (b, a) };
        damage_taken[loser.player] = winner.damage;
        score_delta[winner.player] = 1;

        RoundResult::Victory {
            winner: winner.player,
            loser: loser.player,
            damage: winner.damage,
        }
    }

    /// End-of-match report. Valid at any point; `reason` is `None` mid-match.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            names: self.players.map(|p| p.name.clone()),
            scores: self.players.map(|p| p.score),
            health: self.players.map(|p| p.health),
            rounds_played: self.round_number - 1,
            words_used: self.used_words.len(),
            sample_words: self.used_words.first(SUMMARY_WORD_SAMPLE),
            reason: self.winner_reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::DamageCalculator;
    use crate::words::analyze;
    use smallvec::smallvec;

    fn new_state() -> MatchState {
        MatchState::new(["Ada".into(), "Bo".into()], &MatchConfig::default())
    }

    fn submit(player: PlayerId, word: &str, damage: u32) -> Submission {
        Submission {
            player,
            word: word.to_string(),
            stats: analyze(word),
            damage,
        }
    }

    #[test]
    fn test_new_match() {
        let state = new_state();
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.player(PlayerId::FIRST).name, "Ada");
        assert_eq!(state.player(PlayerId::SECOND).health, 100);
        assert_eq!(state.player(PlayerId::SECOND).score, 0);
        assert!(state.used_words().is_empty());
        assert_eq!(state.status(), MatchStatus::InProgress);
        assert_eq!(state.winner_reason(), None);
        assert_eq!(state.alive_players().len(), 2);
    }

    #[test]
    fn test_victory() {
        let mut state = new_state();
        let outcome = state.resolve_round(
            CombatMode::Length,
            smallvec![
                submit(PlayerId::FIRST, "sword", 25),
                submit(PlayerId::SECOND, "ax", 16),
            ],
        );

        assert_eq!(outcome.round, 1);
        assert_eq!(outcome.winner(), Some(PlayerId::FIRST));
        assert_eq!(state.player(PlayerId::SECOND).health, 75);
        assert_eq!(state.player(PlayerId::FIRST).health, 100);
        assert_eq!(state.player(PlayerId::FIRST).score, 1);
        assert_eq!(state.round_number(), 2);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut state = new_state();
        let outcome = state.resolve_round(
            CombatMode::Length,
            smallvec![
                submit(PlayerId::FIRST, "ax", 16),
                submit(PlayerId::SECOND, "sword", 25),
            ],
        );

        assert_eq!(
            outcome.result,
            RoundResult::Victory { winner: PlayerId::SECOND, loser: PlayerId::FIRST, damage: 25 }
        );
        assert_eq!(outcome.score_delta, PlayerPair::from_values(0, 1));
        assert_eq!(state.player(PlayerId::FIRST).health, 75);
    }

    #[test]
    fn test_tie_hits_both_for_half() {
        let mut state = new_state();
        let calc = DamageCalculator::default();
        let a = calc.compute(CombatMode::Vowels, &analyze("aeiou"));
        let b = calc.compute(CombatMode::Vowels, &analyze("oeiau"));
        assert_eq!((a, b), (35, 35));

        let outcome = state.resolve_round(
            CombatMode::Vowels,
            smallvec![submit(PlayerId::FIRST, "aeiou", a), submit(PlayerId::SECOND, "oeiau", b)],
        );

        assert!(outcome.is_tie());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.damage_taken, PlayerPair::from_values(17, 17));
        assert_eq!(state.player(PlayerId::FIRST).health, 83);
        assert_eq!(state.player(PlayerId::SECOND).health, 83);
        assert_eq!(state.player(PlayerId::FIRST).score, 0);
        assert_eq!(state.player(PlayerId::SECOND).score, 0);
        assert_eq!(state.round_number(), 2);
    }

    #[test]
    fn test_health_clamps_at_zero() {
        let config = MatchConfig::default().with_starting_health(20);
        let mut state = MatchState::new(["Ada".into(), "Bo".into()], &config);

        state.resolve_round(
            CombatMode::Length,
            smallvec![submit(PlayerId::FIRST, "sword", 45), submit(PlayerId::SECOND, "ax", 16)],
        );

        assert_eq!(state.player(PlayerId::SECOND).health, 0);
        assert_eq!(
            state.status(),
            MatchStatus::GameOver(GameOverReason::Victory(PlayerId::FIRST))
        );
        assert!(state.is_game_over());
    }

    #[test]
    fn test_double_knockout() {
        let config = MatchConfig::default().with_starting_health(10);
        let mut state = MatchState::new(["Ada".into(), "Bo".into()], &config);

        state.resolve_round(
            CombatMode::Vowels,
            smallvec![submit(PlayerId::FIRST, "aeiou", 35), submit(PlayerId::SECOND, "oeiau", 35)],
        );

        assert_eq!(state.winner_reason(), Some(GameOverReason::DoubleKnockout));
        assert_eq!(state.winner_reason().and_then(GameOverReason::winner), None);
        assert!(state.alive_players().is_empty());
    }

    #[test]
    fn test_uncontested_round() {
        let mut state = new_state();
        let outcome = state.resolve_round(
            CombatMode::Length,
            smallvec![submit(PlayerId::SECOND, "sword", 25)],
        );

        assert_eq!(outcome.result, RoundResult::Uncontested { player: PlayerId::SECOND });
        assert_eq!(outcome.damage_taken, PlayerPair::with_value(0));
        assert_eq!(state.player(PlayerId::FIRST).health, 100);
        assert_eq!(state.player(PlayerId::SECOND).score, 0);
        assert_eq!(state.round_number(), 2);
    }

    #[test]
    #[should_panic(expected = "A round needs one or two submissions")]
    fn test_empty_round_panics() {
        let mut state = new_state();
        state.resolve_round(CombatMode::Length, SmallVec::new());
    }

    #[test]
    fn test_health_bar() {
        let mut player = Player::new("Ada", 100);
        assert_eq!(player.health_bar().filled, 20);
        assert_eq!(player.health_bar().tier, HealthTier::Healthy);

        player.take_damage(35);
        assert_eq!(player.health_bar().filled, 13);
        assert_eq!(player.health_bar().tier, HealthTier::Wounded);

        player.take_damage(40);
        assert_eq!(player.health_bar().filled, 5);
        assert_eq!(player.health_bar().tier, HealthTier::Critical);

        player.take_damage(500);
        assert_eq!(player.health, 0);
        assert_eq!(player.health_bar().filled, 0);
    }

    #[test]
    fn test_health_bar_large_health() {
        let mut player = Player::new("Ada", 50_000_000);
        assert_eq!(player.health_bar().filled, 20);
        assert_eq!(player.health_bar().tier, HealthTier::Healthy);

        player.take_damage(40_000_000);
        assert_eq!(player.health_bar().filled, 4);
        assert_eq!(player.health_bar().tier, HealthTier::Critical);

        let state = MatchState::new(
            ["Ada".into(), "Bo".into()],
            &MatchConfig::default().with_starting_health(u32::MAX),
        );
        assert_eq!(state.player(PlayerId::FIRST).health_bar().filled, 20);
    }

    #[test]
    fn test_summary() {
        let mut state = new_state();
        for w in ["one", "two", "three"] {
            assert!(state.mark_used(w));
        }
        assert!(!state.mark_used("ONE"));

        state.resolve_round(
            CombatMode::Length,
            smallvec![submit(PlayerId::FIRST, "one", 19), submit(PlayerId::SECOND, "two", 19)],
        );

        let summary = state.summary();
        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.words_used, 3);
        assert_eq!(summary.sample_words, vec!["one", "two", "three"]);
        assert_eq!(summary.names, PlayerPair::from_values("Ada".to_string(), "Bo".to_string()));
        assert_eq!(summary.reason, None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = new_state();
        let snapshot = state.clone();

        state.resolve_round(
            CombatMode::Length,
            smallvec![submit(PlayerId::FIRST, "sword", 25), submit(PlayerId::SECOND, "ax", 16)],
        );

        assert_eq!(snapshot.round_number(), 1);
        assert!(snapshot.history().is_empty());
        assert_eq!(snapshot.player(PlayerId::SECOND).health, 100);
    }
}
