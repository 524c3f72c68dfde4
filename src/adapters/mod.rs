//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - GitHub REST API (contents, pull request commits, check runs)
//! - `file/` - Configuration read from a local working tree
//! - `memory` - Commit subjects supplied up front (offline evaluation)

pub mod file;
pub mod github;
pub mod memory;
