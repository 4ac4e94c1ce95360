//! Parser module: per-file extraction and cross-file aggregation.

pub mod bash;
pub mod merge;

use thiserror::Error;

/// Authoring error inside a single source file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// `##A` text that does not split into `arg=description`.
    #[error("line {line}: malformed argument directive (expected `##A arg=description`): {text}")]
    MalformedArgument { line: usize, text: String },
}
