//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Only
//! [`pass`] talks to the outside world, and only through port traits.
//!
//! - [`matcher`] - Find terms in text, honoring word boundaries
//! - [`resolver`] - Resolve the configuration into sections
//! - [`evaluator`] - Decide whether a pull request is a work in progress
//! - [`reconciler`] - Compare with the published check run
//! - [`renderer`] - Render check run output
//! - [`pass`] - Run all of the above for one trigger

pub mod emoji;
pub mod evaluator;
pub mod matcher;
pub mod pass;
pub mod reconciler;
pub mod renderer;
pub mod resolver;

pub use evaluator::{OVERRIDE_MARKER, evaluate, has_override};
pub use matcher::{SectionMatcher, TermMatcher, match_terms, probe};
pub use pass::{PassAction, PassOptions, PassReport, Ports, RetryPolicy, run_pass};
pub use reconciler::{Reconciliation, namespace_tag, reconcile};
pub use renderer::{RenderOptions, render};
pub use resolver::{fetch_config, resolve, resolve_content};
