//! Error type shared by every pipeline stage.

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors reported by the pipeline.
///
/// Only loading and construction can fail. Tokenizing, normalizing and
/// filtering are total over valid text.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The input path does not exist.
    #[error("{}: file not found", path.display())]
    FileNotFound { path: PathBuf },

    /// The file contents are not valid UTF-8.
    #[error("{}: contents are not valid UTF-8", path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Any other failure while reading a file.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tokenizer pattern did not compile.
    #[error("invalid token pattern {pattern:?}: {source}")]
    PatternError {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A configuration file could not be parsed.
    #[error("{}: invalid configuration: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
