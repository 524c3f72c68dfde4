//! Repository content port
//!
//! Defines how the config resolver reads the configuration file.

use thiserror::Error;

/// Failure to read a file from the repository
#[derive(Debug, Error)]
pub enum FetchError {
    /// The file does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other failure (transport, permissions, decoding)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Source of repository file contents
///
/// Implementations resolve `path` against the revision under evaluation.
#[cfg_attr(test, mockall::automock)]
pub trait ContentSource {
    /// Read a file as UTF-8 text
    fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}
