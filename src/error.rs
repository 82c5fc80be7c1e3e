use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum SweeperError {
    #[error("Path '{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("IO error at path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Interactive selection failed: {0}")]
    Interaction(#[source] std::io::Error),
}

/// Failure while summing the size of a directory subtree.
///
/// Carries the bytes counted before the walk stopped so callers can still
/// report a best-effort size.
#[derive(Error, Debug)]
#[error("Failed to size '{}' (counted {partial_bytes} bytes): {source}", .path.display())]
pub struct SizeError {
    pub path: PathBuf,
    pub partial_bytes: u64,
    #[source]
    pub source: walkdir::Error,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweeperError>;
