//! Round data error types

use derive_more::{Display, Error};
use std::io;
use std::path::PathBuf;

/// Failure to obtain usable round data
///
/// Every variant is fatal at startup: no round can be played without data.
#[derive(Debug, Display, Error)]
pub enum SourceError {
    /// The data file could not be read
    #[display("failed to read word data from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The data contained no records
    #[display("word data contains no records")]
    Empty,

    /// No record exists for the requested root word
    #[display("no record for root word '{_0}'")]
    UnknownRoot(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn read_error_mentions_path_and_cause() {
        let err = SourceError::Read {
            path: PathBuf::from("data/missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let text = err.to_string();
        assert!(text.contains("data/missing.txt"), "{text}");
        assert!(text.contains("no such file"), "{text}");
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_root_display() {
        let err = SourceError::UnknownRoot("zebra".to_string());
        assert_eq!(err.to_string(), "no record for root word 'zebra'");
        assert!(err.source().is_none());
    }
}
