//! Round data loading
//!
//! Parses `root:derived1,derived2,...` records and deals out new rounds.

use super::embedded::RECORDS;
use super::error::SourceError;
use crate::core::{LetterPool, Round, ScoreReset, normalize};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

/// One root word and the words derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub root: String,
    pub derived: Vec<String>,
}

impl Record {
    /// Parse a single `root:derived1,derived2` line
    ///
    /// Splits on the first colon only. A line without a colon has no derived
    /// words. Tokens go through [`normalize`]; empty tokens are dropped.
    /// Returns `None` for a line with an empty root.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (root, derived) = line.split_once(':').unwrap_or((line, ""));

        let root = normalize(root);
        if root.is_empty() {
            return None;
        }

        let derived = derived
            .split(',')
            .map(normalize)
            .filter(|w| !w.is_empty())
            .collect();

        Some(Self { root, derived })
    }

    /// Fresh round for this record, score 0
    #[must_use]
    pub fn to_round(&self) -> Round {
        Round::new(&self.root, &self.derived)
    }
}

/// Supplies rounds picked at random from a set of records
#[derive(Debug, Clone)]
pub struct RoundSource {
    records: Vec<Record>,
}

impl RoundSource {
    /// Parse newline-separated records
    ///
    /// Blank lines are skipped, as are lines whose root is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if no records remain.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::RoundSource;
    ///
    /// let source = RoundSource::parse("cat:act\ndog\n").unwrap();
    /// assert_eq!(source.len(), 2);
    /// assert!(RoundSource::parse("\n\n").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, SourceError> {
        Self::from_lines(content.split('\n'))
    }

    /// Load records from a file
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Read`] if the file cannot be read, or
    /// [`SourceError::Empty`] if it holds no records.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Self::parse(&content)?;
        info!(records = source.len(), "Loaded word data");
        Ok(source)
    }

    /// Records compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] if the embedded data set is empty.
    pub fn embedded() -> Result<Self, SourceError> {
        Self::from_lines(RECORDS.iter().copied())
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Self, SourceError> {
        let records: Vec<Record> = lines
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(number, line)| {
                let record = Record::parse(line);
                if record.is_none() {
                    warn!(line = number + 1, "Skipping record with empty root word");
                }
                record
            })
            .collect();

        if records.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed source
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Look up the record for `root`
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnknownRoot`] if no record has that root.
    pub fn find(&self, root: &str) -> Result<&Record, SourceError> {
        let root = normalize(root);
        self.records
            .iter()
            .find(|r| r.root == root)
            .ok_or(SourceError::UnknownRoot(root))
    }

    /// Pick a record uniformly at random
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Record {
        // Construction guarantees at least one record
        self.records.choose(rng).unwrap_or(&self.records[0])
    }

    /// New round with score 0
    #[instrument(skip_all)]
    pub fn start_round<R: Rng + ?Sized>(&self, rng: &mut R) -> Round {
        let round = self.pick(rng).to_round();
        info!(root = round.root_word(), "Round started");
        round
    }

    /// "Next word": new root, score carried over from `current`
    ///
    /// A deferred reset still pending on `current` stays pending.
    #[instrument(skip_all, fields(score = current.score()))]
    pub fn next_round<R: Rng + ?Sized>(&self, current: &Round, rng: &mut R) -> Round {
        let round = self
            .pick(rng)
            .to_round()
            .with_score(current.score())
            .with_reset_pending(current.score_reset_pending());
        info!(root = round.root_word(), "Moved to next word");
        round
    }

    /// Restart: new root, used words cleared, score reset now or later
    #[instrument(skip_all, fields(score = current.score(), reset = ?reset))]
    pub fn restart_round<R: Rng + ?Sized>(
        &self,
        current: &Round,
        rng: &mut R,
        reset: ScoreReset,
    ) -> Round {
        let round = self.pick(rng).to_round();
        let round = match reset {
            ScoreReset::Immediate => round,
            ScoreReset::Deferred => round.with_score(current.score()).with_pending_reset(),
        };
        info!(root = round.root_word(), "Round restarted");
        round
    }

    /// Every word in the data set spellable from `root`'s letters
    ///
    /// Draws from all roots and derived words, sorted and de-duplicated.
    /// The root itself is excluded.
    #[must_use]
    pub fn derivable_from(&self, root: &str) -> Vec<String> {
        let root = normalize(root);
        let words: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| {
                std::iter::once(r.root.as_str()).chain(r.derived.iter().map(String::as_str))
            })
            .filter(|&w| w != root && LetterPool::can_spell(&root, w))
            .collect();

        words.into_iter().map(str::to_string).collect()
    }
}
