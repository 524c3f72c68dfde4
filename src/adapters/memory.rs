//! In-memory commit source
//!
//! Serves commit subjects known up front, for offline evaluation.

use crate::core::ports::CommitSource;

/// Commit subjects supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct FixedCommits {
    subjects: Vec<String>,
}

impl FixedCommits {
    /// Serve these subjects for every pull request
    ///
    /// Full messages are accepted; only their first line is kept.
    #[must_use]
    pub fn new(messages: &[String]) -> Self {
        Self {
            subjects: messages.iter().map(|m| subject_line(m).to_string()).collect(),
        }
    }
}

impl CommitSource for FixedCommits {
    fn commit_subjects(&self, _pr_number: u64) -> anyhow::Result<Vec<String>> {
        Ok(self.subjects.clone())
    }
}

/// First line of a commit message
#[must_use]
pub fn subject_line(message: &str) -> &str {
    message.lines().next().unwrap_or("")
}
