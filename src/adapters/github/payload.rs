//! GitHub REST wire types
//!
//! Only the fields this tool reads or writes are modelled.

use serde::{Deserialize, Serialize};

use crate::core::models::{CheckOutput, CheckRecord, CheckRunWrite, CheckStatus, Conclusion};

/// One entry of `GET /repos/{owner}/{repo}/pulls/{number}/commits`
#[derive(Debug, Deserialize)]
pub struct PullCommit {
    /// Git commit data
    pub commit: CommitData,
}

/// The `commit` object of a pull request commit
#[derive(Debug, Deserialize)]
pub struct CommitData {
    /// Full commit message
    pub message: String,
}

/// Response of `GET /repos/{owner}/{repo}/commits/{ref}/check-runs`
#[derive(Debug, Deserialize)]
pub struct CheckRunList {
    /// Matching check runs, most recent first
    #[serde(default)]
    pub check_runs: Vec<CheckRunItem>,
}

/// A check run as returned by the API
#[derive(Debug, Deserialize)]
pub struct CheckRunItem {
    /// Check run id
    pub id: u64,
    /// External id set by the creator
    #[serde(default)]
    pub external_id: Option<String>,
    /// Conclusion, null while in progress
    #[serde(default)]
    pub conclusion: Option<Conclusion>,
    /// Rendered output
    #[serde(default)]
    pub output: Option<CheckRunItemOutput>,
}

/// Output block of a returned check run
#[derive(Debug, Deserialize)]
pub struct CheckRunItemOutput {
    /// Output title
    #[serde(default)]
    pub title: Option<String>,
}

impl From<CheckRunItem> for CheckRecord {
    fn from(item: CheckRunItem) -> Self {
        Self {
            id: item.id,
            external_id: item.external_id.filter(|id| !id.is_empty()),
            conclusion: item.conclusion,
            output_title: item.output.and_then(|o| o.title),
        }
    }
}

/// Response of a check run create
#[derive(Debug, Deserialize)]
pub struct CreatedCheckRun {
    /// New check run id
    pub id: u64,
}

/// Body of `POST /repos/{owner}/{repo}/check-runs`
#[derive(Debug, Serialize)]
pub struct CreateCheckRun<'a> {
    #[serde(flatten)]
    fields: UpdateCheckRun<'a>,
    head_sha: &'a str,
}

/// Body of `PATCH /repos/{owner}/{repo}/check-runs/{id}`
#[derive(Debug, Serialize)]
pub struct UpdateCheckRun<'a> {
    name: &'a str,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    conclusion: Option<Conclusion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    started_at: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed_at: Option<&'a str>,
    external_id: &'a str,
    output: &'a CheckOutput,
}

impl<'a> From<&'a CheckRunWrite> for UpdateCheckRun<'a> {
    fn from(write: &'a CheckRunWrite) -> Self {
        Self {
            name: &write.name,
            status: write.status,
            conclusion: write.conclusion,
            started_at: write.started_at.as_deref(),
            completed_at: write.completed_at.as_deref(),
            external_id: &write.external_id,
            output: &write.output,
        }
    }
}

impl<'a> From<&'a CheckRunWrite> for CreateCheckRun<'a> {
    fn from(write: &'a CheckRunWrite) -> Self {
        Self {
            fields: UpdateCheckRun::from(write),
            head_sha: &write.head_sha,
        }
    }
}
