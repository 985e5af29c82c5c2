use std::path::PathBuf;
use thiserror::Error;

/// Errors that may rise while interpreting a single survey line or token.
/// They never abort a load: the offending line is simply discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    /// A valid survey line has at least 12 comma separated fields
    #[error("expecting at least 12 fields, got {0}")]
    TooFewFields(usize),
    #[error("invalid latitude \"{0}\"")]
    InvalidLatitude(String),
    #[error("invalid longitude \"{0}\"")]
    InvalidLongitude(String),
    #[error("unknown radio technology \"{0}\"")]
    UnknownTechnology(String),
}

/// Source level errors. Any of these aborts the current load.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("i/o error: {0}")]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
