//! Results of evaluating a submission
//!
//! A submission is either accepted with a score gain or rejected with one of
//! five reasons, each costing a flat penalty.

use std::fmt;

/// Points lost for any rejected submission
pub const REJECTION_PENALTY: i32 = 1;

/// Why a submission was rejected
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Already accepted earlier this round
    DuplicateWord,
    /// Uses letters the root word does not have (or has too few of)
    NotDerivable,
    /// Shorter than the minimum word length
    TooShort,
    /// Identical to the root word
    SameAsRoot,
    /// Spellable, but not a known word for this root
    NotRecognized,
}

impl ErrorKind {
    /// All rejection reasons, in check order
    pub const ALL: [Self; 5] = [
        Self::DuplicateWord,
        Self::NotDerivable,
        Self::TooShort,
        Self::SameAsRoot,
        Self::NotRecognized,
    ];

    /// Alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::DuplicateWord => "Word used already",
            Self::NotDerivable => "Word not possible",
            Self::TooShort => "Word is not long enough",
            Self::SameAsRoot => "Word is the same as root word",
            Self::NotRecognized => "Word not recognized",
        }
    }

    /// Alert message shown to the player
    ///
    /// Only [`ErrorKind::NotDerivable`] mentions the root word.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::DuplicateWord => "Be more original".to_string(),
            Self::NotDerivable => format!("You can't spell that word from '{root_word}'!"),
            Self::TooShort => "You must type at least 3 letters word".to_string(),
            Self::SameAsRoot => "You must type something different than the root word".to_string(),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
        }
    }

    /// Build the (title, message) pair for this rejection
    #[must_use]
    pub fn alert(self, root_word: &str) -> Alert {
        Alert {
            title: self.title().to_string(),
            message: self.message(root_word),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A (title, message) pair for display in a modal dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Outcome of one evaluated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted { word: String, score_delta: i32 },
    Rejected { reason: ErrorKind, score_delta: i32 },
}

impl Outcome {
    /// A rejection carrying the standard penalty
    #[must_use]
    pub const fn rejected(reason: ErrorKind) -> Self {
        Self::Rejected {
            reason,
            score_delta: -REJECTION_PENALTY,
        }
    }

    /// Score change to apply to the round
    #[inline]
    #[must_use]
    pub const fn score_delta(&self) -> i32 {
        match self {
            Self::Accepted { score_delta, .. } | Self::Rejected { score_delta, .. } => *score_delta,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Rejection reason, if any
    #[must_use]
    pub const fn reason(&self) -> Option<ErrorKind> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(*reason),
        }
    }
}
