//! Error types for `WordTable` and the command interpreter

use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures raised by table operations.
///
/// A missing key is not an error: lookups report it as `None`.
#[derive(Error, Debug)]
pub enum TableError {
    /// A key operation was attempted before the table was given any buckets
    #[error("hash table has no buckets, resize it before use")]
    Unsized,
    /// A resize was requested with a non-positive bucket count
    #[error("invalid table size {requested}, size must be positive")]
    InvalidSize {
        /// The rejected bucket count
        requested: usize,
    },
    /// A hash code method name did not match any known method
    #[error("unknown hash code method `{0}`")]
    UnknownHashCode(String),
    /// A key source could not be opened
    #[error("cannot open file {}", .path.display())]
    SourceUnavailable {
        /// Path of the key source
        path: PathBuf,
        /// Underlying open failure
        #[source]
        source: io::Error,
    },
    /// Reading from an opened key source failed
    #[error("failed to read key source: {0}")]
    Io(#[from] io::Error),
}

/// Failures raised while interpreting a command script
#[derive(Error, Debug)]
pub enum CommandError {
    /// An argument could not be parsed for its command
    #[error("invalid argument `{argument}` for `{command}`")]
    InvalidArgument {
        /// Command name
        command: &'static str,
        /// Raw argument text
        argument: String,
    },
    /// The table rejected the operation
    #[error(transparent)]
    Table(#[from] TableError),
    /// Reading the script or writing command output failed
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}
