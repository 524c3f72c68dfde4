//! Pull request snapshot
//!
//! The parts of a pull request the evaluator reads. Built by the event
//! layer from the trigger payload.

use serde::Serialize;

/// A pull request as seen at trigger time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Title
    pub title: String,
    /// Description; empty when the author left it blank
    pub body: String,
    /// Label names, in the order the platform lists them
    pub labels: Vec<String>,
    /// Head commit the check run is attached to
    pub head_sha: String,
    /// Web URL, linked from the rendered summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
}
