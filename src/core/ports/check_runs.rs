//! Check run port
//!
//! Defines the interface for reading and publishing check runs.

use crate::core::models::{CheckRecord, CheckRunWrite};

/// Store of check runs attached to commits
///
/// The check run is the only durable state this tool has: what it wrote
/// last time is read back through [`CheckRunStore::list_for_ref`].
#[cfg_attr(test, mockall::automock)]
pub trait CheckRunStore {
    /// Check runs named `check_name` on `head_sha`, most recent first
    fn list_for_ref(&self, head_sha: &str, check_name: &str) -> anyhow::Result<Vec<CheckRecord>>;

    /// Create a check run, returning its id
    fn create(&self, run: &CheckRunWrite) -> anyhow::Result<u64>;

    /// Replace the state and output of an existing check run
    fn update(&self, id: u64, run: &CheckRunWrite) -> anyhow::Result<()>;
}
