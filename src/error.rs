//! Error type for a documentation run.

use crate::parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a run can fail. All of them are fatal.
///
/// Messages leave out the underlying cause; render with `{:#}` through
/// `anyhow` to get the full chain on one line.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Reading {} failed", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Writing {} failed", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No \"{pattern}\" files found in {}", dir.display())]
    NoFiles { pattern: String, dir: PathBuf },

    #[error("invalid file pattern \"{pattern}\"")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Parsing {} failed", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
