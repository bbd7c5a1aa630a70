//! Errors from reading, decoding, and rewriting files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::decode::DecodeError;

/// Fatal errors of a cleanup run. The first one aborts the run.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to replace {}: {source}", .path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("stdin/stdout: {0}")]
    Stream(#[source] io::Error),
    #[error("stdin: {0}")]
    StreamDecode(#[source] DecodeError),
}

pub type Result<T> = std::result::Result<T, CleanupError>;
