//! Errors raised by a pipeline run.
//!
//! Every variant collapses onto one of three user-facing kinds
//! ([`ErrorKind`]); the binary prints [`Error::user_message`] and never lets
//! an error escape as a panic.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("input file {} does not exist", .path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to decode JSON in {}: {source}", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to render output JSON: {0}")]
    Render(#[source] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Coarse classification reported to the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MissingFile,
    MalformedJson,
    Unexpected,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingFile { .. } => ErrorKind::MissingFile,
            Error::MalformedJson { .. } => ErrorKind::MalformedJson,
            Error::Read { .. } | Error::Render(_) | Error::Write { .. } => ErrorKind::Unexpected,
        }
    }

    /// The one-line message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::MissingFile { path } => {
                format!("Error: The file {} does not exist.", path.display())
            }
            Error::MalformedJson { .. } => {
                "Error: Failed to decode JSON. Ensure the input file is a valid JSON file."
                    .to_string()
            }
            other => format!("An unexpected error occurred: {other}"),
        }
    }
}
