//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the decision engine and the
//! hosting platform (repository contents, pull request commits, check runs).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations, so every service can be driven by in-memory mocks.
//! A pass is single-threaded, so the traits carry no `Send`/`Sync` bounds.

mod check_runs;
mod commits;
mod content;

pub use check_runs::CheckRunStore;
pub use commits::CommitSource;
pub use content::{ContentSource, FetchError};

#[cfg(test)]
pub use check_runs::MockCheckRunStore;
#[cfg(test)]
pub use commits::MockCommitSource;
#[cfg(test)]
pub use content::MockContentSource;
