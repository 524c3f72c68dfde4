//! Trigger event payload
//!
//! Reads the webhook payload GitHub Actions writes to `GITHUB_EVENT_PATH`
//! and turns its `pull_request` object into a [`PullRequest`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::PullRequest;
use crate::error::{Result, WipError};

/// Pull request actions that can change the readiness state
pub const TRIGGER_ACTIONS: [&str; 7] = [
    "opened",
    "edited",
    "labeled",
    "unlabeled",
    "synchronize",
    "reopened",
    "ready_for_review",
];

/// A pull request event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// Webhook action, e.g. `opened`
    pub action: Option<String>,
    /// The pull request snapshot
    pub pull_request: PullRequest,
}

impl PullRequestEvent {
    /// Whether this action warrants an evaluation pass
    #[must_use]
    pub fn triggers_pass(&self) -> bool {
        self.action.as_deref().is_some_and(|a| TRIGGER_ACTIONS.contains(&a))
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    labels: Vec<LabelPayload>,
    head: HeadPayload,
    #[serde(default)]
    html_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct HeadPayload {
    sha: String,
}

impl From<PullRequestPayload> for PullRequest {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            title: payload.title.unwrap_or_default(),
            body: payload.body.unwrap_or_default(),
            labels: payload.labels.into_iter().map(|l| l.name).collect(),
            head_sha: payload.head.sha,
            html_url: payload.html_url,
        }
    }
}

/// Parse an event payload
///
/// Returns `None` when the payload carries no pull request.
pub fn parse_event(json: &str) -> Result<Option<PullRequestEvent>> {
    let payload: EventPayload =
        serde_json::from_str(json).map_err(|e| WipError::Event(e.to_string()))?;

    Ok(payload.pull_request.map(|pr| PullRequestEvent {
        action: payload.action,
        pull_request: pr.into(),
    }))
}

/// Read and parse an event payload file
pub fn load_event(path: &Path) -> Result<Option<PullRequestEvent>> {
    let json = fs::read_to_string(path)
        .map_err(|e| WipError::Event(format!("failed to read {}: {e}", path.display())))?;
    parse_event(&json)
}
