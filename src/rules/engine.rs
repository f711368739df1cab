//! Match engine: the round loop.
//!
//! Each round:
//! 1. Draw a combat mode
//! 2. Ask every player still standing for a word until one is valid
//!    (each accepted word is burned immediately, so the second player
//!    cannot repeat the first player's word in the same round)
//! 3. Score the words and resolve the round
//!
//! The loop ends when a player's health reaches 0, or aborts when the
//! presenter reports a cancellation.

use tracing::{debug, info};

use super::presenter::{MatchEvent, Presenter};
use crate::combat::{select_mode, CombatMode, DamageCalculator};
use crate::core::error::Result;
use crate::core::{
    GameOverReason, GameRng, MatchConfig, MatchState, PlayerId, RoundOutcome, Submission,
    Submissions, WordError,
};
use crate::words::{analyze, validate, UsedWords};

/// Validate, analyze and score one raw input.
///
/// Pure: does not record the word in `used`.
///
/// ```
/// use word_combat::combat::CombatMode;
/// use word_combat::core::{MatchConfig, PlayerId};
/// use word_combat::rules::submit_word;
/// use word_combat::words::UsedWords;
///
/// let used = UsedWords::new();
/// let submission =
///     submit_word(PlayerId::FIRST, "Kayak", CombatMode::Palindrome, &used, &MatchConfig::default())
///         .unwrap();
/// assert_eq!(submission.word, "kayak");
/// assert_eq!(submission.damage, 40);
/// ```
pub fn submit_word(
    player: PlayerId,
    raw: &str,
    mode: CombatMode,
    used: &UsedWords,
    config: &MatchConfig,
) -> std::result::Result<Submission, WordError> {
    let word = validate(raw, used, config.min_word_length)?;
    let stats = analyze(&word);
    let damage = DamageCalculator::new(config).compute(mode, &stats);

    Ok(Submission {
        player,
        word,
        stats,
        damage,
    })
}

/// Owns the match state and drives it round by round.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    rng: GameRng,
    state: MatchState,
}

impl MatchEngine {
    /// Create an engine whose mode draws are seeded from `config.seed`.
    #[must_use]
    pub fn new(names: [String; 2], config: MatchConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context("modes");
        Self::with_rng(names, config, rng)
    }

    /// Create an engine with an explicit RNG for mode selection.
    #[must_use]
    pub fn with_rng(names: [String; 2], config: MatchConfig, rng: GameRng) -> Self {
        let state = MatchState::new(names, &config);
        Self { config, rng, state }
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Draw the next round's combat mode.
    pub fn select_mode(&mut self) -> (CombatMode, &'static str) {
        select_mode(&mut self.rng)
    }

    /// Score a raw input against this match's used words. Does not record it.
    pub fn submit_word(
        &self,
        player: PlayerId,
        raw: &str,
        mode: CombatMode,
    ) -> std::result::Result<Submission, WordError> {
        submit_word(player, raw, mode, self.state.used_words(), &self.config)
    }

    /// Play the match to the end.
    ///
    /// Returns the reason the match ended, or `MatchError::Cancelled` if the
    /// presenter aborted it. A cancelled round is never resolved.
    pub fn run<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<GameOverReason> {
        info!(
            first = %self.state.player(PlayerId::FIRST).name,
            second = %self.state.player(PlayerId::SECOND).name,
            seed = self.config.seed,
            "match started"
        );
        presenter.present(&MatchEvent::MatchStarted { state: &self.state })?;

        loop {
            if let Some(reason) = self.state.winner_reason() {
                let summary = self.state.summary();
                info!(?reason, rounds = summary.rounds_played, "match over");
                presenter.present(&MatchEvent::MatchOver {
                    reason,
                    summary: &summary,
                })?;
                return Ok(reason);
            }

            if let Err(e) = self.play_round(presenter) {
                info!(round = self.state.round_number(), "match aborted: {}", e);
                return Err(e);
            }
        }
    }

    /// Play a single round.
    ///
    /// # Panics
    ///
    /// Panics if the match is already over.
    pub fn play_round<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> Result<RoundOutcome> {
        assert!(!self.state.is_game_over(), "Cannot play a round after the match is over");

        let (mode, description) = self.select_mode();
        debug!(round = self.state.round_number(), %mode, "round started");
        presenter.present(&MatchEvent::RoundStarted {
            round: self.state.round_number(),
            mode,
            description,
            state: &self.state,
        })?;

        let mut submissions = Submissions::new();
        for player in self.state.alive_players() {
            submissions.push(self.collect_word(presenter, player, mode)?);
        }

        let outcome = self.state.resolve_round(mode, submissions);
        presenter.present(&MatchEvent::RoundResolved {
            outcome: &outcome,
            state: &self.state,
        })?;

        Ok(outcome)
    }

    /// Ask `player` until a valid word comes back, then burn it.
    fn collect_word<P: Presenter + ?Sized>(
        &mut self,
        presenter: &mut P,
        player: PlayerId,
        mode: CombatMode,
    ) -> Result<Submission> {
        loop {
            let raw = presenter.request_word(player, &self.state.player(player).name, mode)?;

            match self.submit_word(player, &raw, mode) {
                Ok(submission) => {
                    self.state.mark_used(&submission.word);
                    debug!(%player, word = %submission.word, damage = submission.damage, "word accepted");
                    presenter.present(&MatchEvent::WordAccepted {
                        submission: &submission,
                    })?;
                    return Ok(submission);
                }
                Err(error) => {
                    debug!(%player, input = %raw, %error, "word rejected");
                    presenter.present(&MatchEvent::WordRejected {
                        player,
                        error: &error,
                    })?;
                }
            }
        }
    }
}
