//! Data-set audit
//!
//! Finds listed words the engine could never accept: words that cannot be
//! spelled from their root, are too short, or repeat the root itself.

use crate::core::{ErrorKind, Outcome};
use crate::engine::evaluate;
use crate::wordlists::{Record, RoundSource};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// A listed word that can never be accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditIssue {
    pub root: String,
    pub word: String,
    pub reason: ErrorKind,
}

/// Result of auditing a data set
#[derive(Debug)]
pub struct AuditReport {
    pub records_checked: usize,
    pub words_checked: usize,
    pub issues: Vec<AuditIssue>,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Audit every record of `source`, showing a progress bar
#[instrument(skip_all, fields(records = source.len()))]
pub fn run_audit(source: &RoundSource) -> AuditReport {
    let pb = ProgressBar::new(source.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} records")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let report = audit_records(source.records(), &pb);
    pb.finish_and_clear();

    info!(
        issues = report.issues.len(),
        words = report.words_checked,
        "Audit finished"
    );
    report
}

/// Audit `records` in parallel, ticking `progress` once per record
///
/// Issues are ordered by record, then by position within the record.
#[must_use]
pub fn audit_records(records: &[Record], progress: &ProgressBar) -> AuditReport {
    let start = Instant::now();

    let per_record: Vec<Vec<AuditIssue>> = records
        .par_iter()
        .map(|record| {
            let issues = audit_record(record);
            progress.inc(1);
            issues
        })
        .collect();

    AuditReport {
        records_checked: records.len(),
        words_checked: records.iter().map(|r| r.derived.len()).sum(),
        issues: per_record.into_iter().flatten().collect(),
        duration: start.elapsed(),
    }
}

/// Evaluate each listed word on a fresh round for its record
fn audit_record(record: &Record) -> Vec<AuditIssue> {
    let round = record.to_round();
    record
        .derived
        .iter()
        .filter_map(|word| match evaluate(&round, word) {
            Some(Outcome::Rejected { reason, .. }) => Some(AuditIssue {
                root: record.root.clone(),
                word: word.clone(),
                reason,
            }),
            _ => None,
        })
        .collect()
}
