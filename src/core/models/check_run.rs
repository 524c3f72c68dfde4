//! Check run model
//!
//! The platform's status-check entity. A published check run is both this
//! tool's output and the only record of what it decided last time.

use serde::{Deserialize, Serialize};

/// Final conclusion reported by a completed check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    /// Passed
    Success,
    /// Failed
    Failure,
    /// Finished without a verdict
    Neutral,
    /// Cancelled before completion
    Cancelled,
    /// Skipped
    Skipped,
    /// Timed out
    TimedOut,
    /// Needs user action
    ActionRequired,
    /// Superseded by a newer run
    Stale,
    /// Any conclusion this tool does not know about
    #[serde(other)]
    Other,
}

/// Lifecycle status of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Waiting to start
    Queued,
    /// Running (used while the pull request is a work in progress)
    InProgress,
    /// Done
    Completed,
}

/// A previously published check run, as read back from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    /// Platform id, used to update the record in place
    pub id: u64,
    /// External id this tool stamped on the record, if any
    pub external_id: Option<String>,
    /// Conclusion, absent while the run is still in progress
    pub conclusion: Option<Conclusion>,
    /// Title of the rendered output
    pub output_title: Option<String>,
}

impl CheckRecord {
    /// Whether this record was written by a pass using the given namespace tag
    #[must_use]
    pub fn is_owned_by(&self, namespace: &str) -> bool {
        self.external_id
            .as_deref()
            .is_some_and(|id| id.starts_with(namespace))
    }
}

/// Human-readable output of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutput {
    /// One-line headline
    pub title: String,
    /// Markdown summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Markdown details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Everything needed to create or update a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRunWrite {
    /// Check name shown on the pull request
    pub name: String,
    /// Commit the check is attached to
    pub head_sha: String,
    /// Lifecycle status
    pub status: CheckStatus,
    /// Conclusion, set only when completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<Conclusion>,
    /// RFC 3339 start time, set while in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
    /// RFC 3339 completion time, set when completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    /// External id carrying the namespace tag
    pub external_id: String,
    /// Rendered output
    pub output: CheckOutput,
}
