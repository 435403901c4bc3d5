//! Error types for funcloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while counting
#[derive(Error, Debug)]
pub enum FunclocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// The root of a walk could not be traversed
    #[error("failed to walk '{path}': {message}")]
    Walk { path: PathBuf, message: String },
}
