//! Round data for the word game
//!
//! Loads `root:derived,...` records from a file or the embedded default set
//! and picks rounds from them at random.

mod embedded;
mod error;
pub mod loader;

pub use embedded::{RECORDS, RECORDS_COUNT};
pub use error::SourceError;
pub use loader::{Record, RoundSource};
