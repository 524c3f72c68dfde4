//! Pull request commit port

/// Source of commit subjects for a pull request
#[cfg_attr(test, mockall::automock)]
pub trait CommitSource {
    /// First line of every commit message in the pull request, in commit order
    fn commit_subjects(&self, pr_number: u64) -> anyhow::Result<Vec<String>>;
}
