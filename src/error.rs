//! Error types for wipguard
//!
//! Every variant is fatal to the pass that raised it except
//! [`WipError::ConfigNotFound`], which the config resolver recovers from by
//! falling back to the default section.

use thiserror::Error;

/// Result type alias for wipguard operations
pub type Result<T> = std::result::Result<T, WipError>;

/// Main error type for an evaluation pass
#[derive(Debug, Error)]
pub enum WipError {
    /// The configured file does not exist at the pull request head
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// The configuration file could not be fetched
    #[error("failed to fetch configuration file {path}: {message}")]
    ConfigFetch {
        /// Configured path
        path: String,
        /// Underlying failure
        message: String,
    },

    /// The configuration is not a section or a list of sections
    #[error("can not parse the configuration: {0}")]
    ConfigParse(String),

    /// Commit subjects could not be listed
    #[error("failed to list pull request commits: {0}")]
    CommitFetch(String),

    /// Previous check runs could not be listed
    #[error("failed to list check runs: {0}")]
    CheckQuery(String),

    /// The check run write failed on every attempt
    #[error("failed to write check run after {attempts} attempt(s): {message}")]
    UpstreamWrite {
        /// Attempts made, including the first
        attempts: u32,
        /// Last failure
        message: String,
    },

    /// The trigger payload is unreadable or malformed
    #[error("invalid event payload: {0}")]
    Event(String),

    /// Runtime settings are missing or malformed
    #[error("invalid settings: {0}")]
    Settings(String),
}

impl WipError {
    /// Stable error code for machine-readable output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound(_) => "CONFIG_NOT_FOUND",
            Self::ConfigFetch { .. } => "CONFIG_FETCH",
            Self::ConfigParse(_) => "CONFIG_PARSE",
            Self::CommitFetch(_) => "COMMIT_FETCH",
            Self::CheckQuery(_) => "CHECK_QUERY",
            Self::UpstreamWrite { .. } => "UPSTREAM_WRITE",
            Self::Event(_) => "EVENT",
            Self::Settings(_) => "SETTINGS",
        }
    }
}
