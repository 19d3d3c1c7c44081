//! Error types for thermzonelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading thermal zones
#[derive(Error, Debug)]
pub enum ThermzoneError {
    /// The base directory could not be listed
    #[error("cannot read thermal directory '{path}': {source}")]
    BaseDirUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The base path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A zone directory lacks one of its required files
    #[error("thermal zone {zone} is missing '{path}'")]
    MissingFile { zone: u64, path: PathBuf },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The temperature file does not hold a signed integer
    #[error("invalid temperature in '{path}': {content:?}")]
    InvalidTemperature { path: PathBuf, content: String },

    /// The type file holds no label
    #[error("empty sensor type in '{path}'")]
    EmptyType { path: PathBuf },

    /// Zone number does not fit the integer range
    #[error("zone number out of range in '{name}'")]
    InvalidZoneNumber { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ThermzoneError {
    /// Whether this error reports an absent `temp`/`type` file.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, ThermzoneError::MissingFile { .. })
    }
}
