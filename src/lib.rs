//! wipguard - flag work-in-progress pull requests with a GitHub status check
//!
//! A pass reads the pull request's title, labels and commit subjects, looks
//! for configurable work-in-progress terms, and publishes the verdict as a
//! check run. The published check run doubles as the only state the tool
//! keeps, so a pass writes nothing when the verdict has not changed.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod output;

pub use error::{Result, WipError};
