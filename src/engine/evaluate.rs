//! Submission evaluation
//!
//! Classifies one submission against the current round. Checks run in a fixed
//! order and the first failure decides the outcome:
//!
//! 1. already used this round
//! 2. not spellable from the root's letters
//! 3. shorter than [`MIN_WORD_LENGTH`]
//! 4. identical to the root word
//! 5. missing from the round's word list

use crate::core::{
    ErrorKind, FULL_LENGTH_MULTIPLIER, LetterPool, MIN_WORD_LENGTH, Outcome, Round, char_len,
    normalize,
};
use tracing::debug;

/// Evaluate a raw submission against `round`
///
/// Returns `None` when the submission is blank after normalization; that is
/// not a rejection and costs nothing. The round is never modified; apply the
/// outcome with [`Round::apply`].
///
/// # Examples
/// ```
/// use word_scramble::core::{ErrorKind, Outcome, Round};
/// use word_scramble::engine::evaluate;
///
/// let round = Round::new("alphabet", ["bat", "table"]);
///
/// assert_eq!(
///     evaluate(&round, " BAT "),
///     Some(Outcome::Accepted { word: "bat".into(), score_delta: 3 })
/// );
/// assert_eq!(
///     evaluate(&round, "aaa").and_then(|o| o.reason()),
///     Some(ErrorKind::NotDerivable)
/// );
/// assert_eq!(evaluate(&round, "   "), None);
/// ```
#[must_use]
pub fn evaluate(round: &Round, raw: &str) -> Option<Outcome> {
    let word = normalize(raw);
    if word.is_empty() {
        return None;
    }

    let outcome = match check(round, &word) {
        Err(reason) => Outcome::rejected(reason),
        Ok(()) => Outcome::Accepted {
            score_delta: score(round.root_word(), &word),
            word,
        },
    };

    debug!(root = round.root_word(), ?outcome, "Evaluated submission");
    Some(outcome)
}

/// Run the checks on an already-normalized word
fn check(round: &Round, word: &str) -> Result<(), ErrorKind> {
    if round.is_used(word) {
        return Err(ErrorKind::DuplicateWord);
    }
    if !LetterPool::can_spell(round.root_word(), word) {
        return Err(ErrorKind::NotDerivable);
    }
    if char_len(word) < MIN_WORD_LENGTH {
        return Err(ErrorKind::TooShort);
    }
    if word == round.root_word() {
        return Err(ErrorKind::SameAsRoot);
    }
    if !round.is_valid_word(word) {
        return Err(ErrorKind::NotRecognized);
    }
    Ok(())
}

/// Points for an accepted word
///
/// A word using as many letters as the root scores double.
#[must_use]
pub fn score(root_word: &str, word: &str) -> i32 {
    let length = char_len(word) as i32;
    if char_len(word) == char_len(root_word) {
        length * FULL_LENGTH_MULTIPLIER
    } else {
        length
    }
}
