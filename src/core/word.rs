//! Word normalization and letter multisets
//!
//! A "letter" is a user-perceived character (an extended grapheme cluster),
//! so `é` counts once whether it arrives precomposed or as `e` plus a
//! combining accent. Words are NFC-normalized before any comparison.

use rustc_hash::FxHashMap;
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercase, trim and NFC-normalize a raw submission
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Table\n"), "table");
/// assert_eq!(normalize("   "), "");
/// assert_eq!(normalize("Cafe\u{301}"), "caf\u{e9}");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().nfc().collect()
}

/// Length of a word in letters, not bytes or code points
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Multiset of the letters still available for spelling
///
/// Built from a root word; each letter maps to the number of copies left.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<String, u32>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`, duplicates included
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for letter in word.graphemes(true) {
            *counts.entry(letter.to_string()).or_insert(0) += 1;
        }
        Self { counts }
    }

    #[cfg(test)]
    fn count(&self, letter: &str) -> u32 {
        self.counts.get(letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().map(|&n| n as usize).sum()
    }

    /// True when no letters remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one copy of `letter`
    ///
    /// Returns `false` and leaves the pool untouched if none is left.
    pub fn take(&mut self, letter: &str) -> bool {
        match self.counts.get_mut(letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Consume the letters of `word` left to right, stopping at the first miss
    ///
    /// Returns `true` if every letter was available.
    pub fn spell(&mut self, word: &str) -> bool {
        word.graphemes(true).all(|letter| self.take(letter))
    }

    /// Check whether `word` can be spelled from `root` without reusing letters
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// assert!(LetterPool::can_spell("alphabet", "bat"));
    /// assert!(!LetterPool::can_spell("alphabet", "bee")); // only one 'e'
    /// ```
    #[must_use]
    pub fn can_spell(root: &str, word: &str) -> bool {
        Self::from_word(root).spell(word)
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(&str, u32)> = self
            .counts
            .iter()
            .filter(|&(_, &n)| n > 0)
            .map(|(c, &n)| (c.as_str(), n))
            .collect();
        letters.sort_unstable();

        for (letter, count) in letters {
            for _ in 0..count {
                f.write_str(letter)?;
            }
        }
        Ok(())
    }
}
