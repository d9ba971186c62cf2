//! Game session: one player's round state over time

use super::evaluate::evaluate;
use crate::core::{Outcome, Round, ScoreReset};
use crate::wordlists::RoundSource;
use rand::Rng;
use rand::rngs::ThreadRng;

/// Coordinates rounds for a single player
///
/// Owns the round data, the current round and the random source used to pick
/// new roots.
pub struct Session<R: Rng = ThreadRng> {
    source: RoundSource,
    round: Round,
    rng: R,
}

impl Session<ThreadRng> {
    /// Start a session using the thread-local random generator
    #[must_use]
    pub fn new(source: RoundSource) -> Self {
        Self::with_rng(source, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session with an explicit random source
    ///
    /// Pass a seeded generator to make root selection reproducible.
    pub fn with_rng(source: RoundSource, mut rng: R) -> Self {
        let round = source.start_round(&mut rng);
        Self { source, round, rng }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> &RoundSource {
        &self.source
    }

    /// Evaluate a submission and apply the outcome to the current round
    ///
    /// Blank submissions return `None` and change nothing.
    pub fn submit(&mut self, raw: &str) -> Option<Outcome> {
        let outcome = evaluate(&self.round, raw)?;
        self.round.apply(&outcome);
        Some(outcome)
    }

    /// Move to a new root word, keeping the score
    ///
    /// A deferred reset from an earlier restart survives the move.
    pub fn next_word(&mut self) {
        self.round = self.source.next_round(&self.round, &mut self.rng);
    }

    /// Start over on a new root word
    ///
    /// Returns the score before the restart so it can be shown to the player.
    /// With [`ScoreReset::Deferred`] the old score stays visible until
    /// [`Session::settle_score_reset`] is called.
    pub fn restart(&mut self, reset: ScoreReset) -> i32 {
        let previous = self.round.score();
        self.round = self
            .source
            .restart_round(&self.round, &mut self.rng, reset);
        previous
    }

    /// Apply a pending deferred score reset
    ///
    /// Returns `true` if the score was cleared.
    pub const fn settle_score_reset(&mut self) -> bool {
        self.round.settle_score_reset()
    }
}
