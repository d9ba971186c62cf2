//! Single-word check
//!
//! Evaluates one submission against a named root word without starting a
//! game. Useful for scripting and for checking data files by hand.

use crate::core::{Outcome, Round};
use crate::engine::evaluate;
use crate::wordlists::{RoundSource, SourceError};

/// Result of checking one word
#[derive(Debug)]
pub struct CheckResult {
    pub round: Round,
    pub outcome: Option<Outcome>,
}

/// Evaluate `word` on a fresh round for `root`
///
/// # Errors
///
/// Returns [`SourceError::UnknownRoot`] if `source` has no record for `root`.
pub fn check_word(
    source: &RoundSource,
    root: &str,
    word: &str,
) -> Result<CheckResult, SourceError> {
    let round = source.find(root)?.to_round();
    let outcome = evaluate(&round, word);
    Ok(CheckResult { round, outcome })
}
