//! Reconciliation service - decides whether a new check run write is needed
//!
//! The previously published check run is the only memory between passes.
//! Its conclusion and title are read back as an approximate prior state:
//!
//! - `wip` is "conclusion is not success"
//! - `override` is "completed successfully and the title mentions override"
//!
//! A write is needed only when one of those two booleans flips. A different
//! matched term alone is not a change.

use uuid::Uuid;

use crate::core::models::{CheckRecord, Conclusion, EvaluationState};

/// Outcome of comparing the next state against the published one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Whether the published state must be rewritten
    pub changed: bool,
    /// Id of the record to update; `None` means create
    pub prior_id: Option<u64>,
    /// External id for the write: reused on update, fresh on create
    pub external_id: String,
}

impl Reconciliation {
    /// Whether a write would update an existing record
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.prior_id.is_some()
    }
}

/// State recovered from a published check run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishedState {
    /// Whether the record reported a work in progress
    pub wip: bool,
    /// Whether the record reported an override
    pub overridden: bool,
}

impl PublishedState {
    /// Read the booleans back from a record
    #[must_use]
    pub fn from_record(record: &CheckRecord) -> Self {
        let wip = record.conclusion != Some(Conclusion::Success);
        let overridden = !wip
            && record
                .output_title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains("override"));
        Self { wip, overridden }
    }

    /// Whether `next` differs in either boolean
    #[must_use]
    pub const fn differs_from(self, next: &EvaluationState) -> bool {
        self.wip != next.wip || self.overridden != next.overridden
    }
}

/// Namespace tag prefixed to every external id this tool writes
#[must_use]
pub fn namespace_tag(check_name: &str) -> String {
    format!("[{check_name}]")
}

/// A fresh external id under `namespace`
#[must_use]
pub fn new_external_id(namespace: &str) -> String {
    format!("{namespace}{}", Uuid::new_v4())
}

/// Compare `next` with the most recent record owned by `namespace`
///
/// `prior` must be ordered most recent first; records written by anything
/// else are ignored.
#[must_use]
pub fn reconcile(prior: &[CheckRecord], next: &EvaluationState, namespace: &str) -> Reconciliation {
    let Some(latest) = prior.iter().find(|r| r.is_owned_by(namespace)) else {
        log::debug!("no previous check runs under {namespace}");
        return Reconciliation {
            changed: true,
            prior_id: None,
            external_id: new_external_id(namespace),
        };
    };

    let published = PublishedState::from_record(latest);
    log::debug!("found check run {}: {published:?}", latest.id);

    Reconciliation {
        changed: published.differs_from(next),
        prior_id: Some(latest.id),
        external_id: latest
            .external_id
            .clone()
            .unwrap_or_else(|| new_external_id(namespace)),
    }
}
