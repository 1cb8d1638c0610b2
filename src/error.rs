//! Error types for tailwatch
//!
//! Uses `thiserror` for library errors. `ReadError` is the narrow outcome of a
//! single tail read; `TailwatchError` is everything that can stop the process
//! before the watch loop starts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tailwatch operations
pub type TailwatchResult<T> = Result<T, TailwatchError>;

/// Why a tail read failed.
///
/// Each variant is a distinct outcome: startup maps them to different exit
/// codes, and the watch loop treats all of them as transient.
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("no such file or directory: {path}")]
    NotFound { path: PathBuf },

    #[error("cannot open directory {path}, must specify a file")]
    IsDirectory { path: PathBuf },

    #[error("unable to open the file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main error type for tailwatch
#[derive(Error, Debug)]
pub enum TailwatchError {
    /// Settings file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Initial read of the target failed
    #[error(transparent)]
    Read(#[from] ReadError),

    /// No change notification backend could be created
    #[error("unable to watch the file: {message}")]
    WatchUnavailable { message: String },

    /// The Ctrl+C handler could not be installed
    #[error("unable to install the interrupt handler: {message}")]
    SignalHandler { message: String },

    /// Terminal output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TailwatchError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TailwatchError::Config { .. } => 1,
            TailwatchError::Read(ReadError::NotFound { .. }) => 2,
            TailwatchError::Read(ReadError::IsDirectory { .. }) => 3,
            TailwatchError::Read(ReadError::Unreadable { .. }) => 4,
            TailwatchError::WatchUnavailable { .. } => 6,
            TailwatchError::SignalHandler { .. } | TailwatchError::Io(_) => 5,
        }
    }
}
