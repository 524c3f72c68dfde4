//! Domain models for wipguard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Location`] - Where a term may be searched
//! - [`PullRequest`] - The inspected pull request
//! - [`Section`] - "Look for these terms in these locations"
//! - [`EvaluationState`] - Whether a pull request is a work in progress, and why
//! - [`CheckRecord`] - A previously published check run

mod check_run;
mod location;
mod pull_request;
mod section;
mod state;

pub use check_run::{CheckOutput, CheckRecord, CheckRunWrite, CheckStatus, Conclusion};
pub use location::Location;
pub use pull_request::PullRequest;
pub use section::{DEFAULT_LOCATIONS, DEFAULT_TERMS, ResolvedConfig, Section};
pub use state::{EvaluationState, TermMatch};
