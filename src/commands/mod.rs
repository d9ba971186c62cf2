//! Command implementations

pub mod audit;
pub mod check;
pub mod simple;

pub use audit::{AuditIssue, AuditReport, audit_records, run_audit};
pub use check::{CheckResult, check_word};
pub use simple::run_simple;
