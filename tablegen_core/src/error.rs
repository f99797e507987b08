//! Error types for the table generator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the engine.
pub type TableResult<T> = Result<T, TableError>;

/// Failures that abort a generation run.
#[derive(Error, Debug)]
pub enum TableError {
    /// The input header is missing, unreadable, or failed mid-read.
    #[error("cannot read input header {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A table line broke the declaration convention.
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The generated header could not be staged or moved into place.
    #[error("cannot write generated header {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No profile is registered under the requested name.
    #[error("unknown table profile: {0}")]
    UnknownProfile(String),
}

/// A malformed table line, with enough context to point at it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {kind} in `{raw_line}`")]
pub struct ParseError {
    pub line_number: usize,
    pub raw_line: String,
    pub kind: ParseErrorKind,
}

/// What exactly was wrong with a table line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("expected at least 3 whitespace-separated tokens, found {found}")]
    TooFewTokens { found: usize },

    #[error("declaration `{token}` has no opening parenthesis")]
    MissingParen { token: String },

    #[error("`{identifier}` is not a valid identifier")]
    InvalidIdentifier { identifier: String },

    #[error("identifier `{identifier}` has no `_` segment at index {index}")]
    MissingSegment { identifier: String, index: usize },

    #[error("identifier `{identifier}` has an empty `_` segment at index {index}")]
    EmptySegment { identifier: String, index: usize },
}
