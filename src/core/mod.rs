//! Core domain logic for wipguard
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Section, EvaluationState, CheckRecord)
//! - `services/` - Matching, evaluation, reconciliation and rendering
//! - `ports/` - Trait definitions for the hosting platform

pub mod models;
pub mod ports;
pub mod services;
