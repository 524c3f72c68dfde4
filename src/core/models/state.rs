//! Evaluation state
//!
//! The result of inspecting one pull request. The three match fields travel
//! together as a [`TermMatch`], so a state either carries a complete match
//! or none at all.

use serde::Serialize;

use super::{Location, ResolvedConfig, Section};

/// A term found in one location of a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermMatch {
    /// Where the term was found
    pub location: Location,
    /// The full text that contained the term (title, label name or commit subject)
    pub text: String,
    /// The matched substring, as written in `text`
    pub term: String,
}

/// Readiness of a pull request for one evaluation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationState {
    /// Whether the pull request is a work in progress
    pub wip: bool,
    /// Whether the override marker forced the ready state
    #[serde(rename = "override")]
    pub overridden: bool,
    /// Sections the pass evaluated (empty when overridden)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
    /// Whether the sections came from a user configuration
    pub used_custom_config: bool,
    /// The match that made the pull request a work in progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<TermMatch>,
    /// Id of the previously published check run, once reconciled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_check_id: Option<u64>,
}

impl EvaluationState {
    /// The override marker was found: ready, no matching performed
    #[must_use]
    pub const fn overridden() -> Self {
        Self {
            wip: false,
            overridden: true,
            sections: Vec::new(),
            used_custom_config: false,
            matched: None,
            prior_check_id: None,
        }
    }

    /// No section matched
    #[must_use]
    pub fn ready(config: ResolvedConfig) -> Self {
        Self {
            wip: false,
            overridden: false,
            sections: config.sections,
            used_custom_config: config.used_custom_config,
            matched: None,
            prior_check_id: None,
        }
    }

    /// A section matched
    #[must_use]
    pub fn work_in_progress(config: ResolvedConfig, matched: TermMatch) -> Self {
        Self {
            wip: true,
            overridden: false,
            sections: config.sections,
            used_custom_config: config.used_custom_config,
            matched: Some(matched),
            prior_check_id: None,
        }
    }

    /// Attach the id of the previously published check run
    #[must_use]
    pub fn with_prior_check(mut self, id: Option<u64>) -> Self {
        self.prior_check_id = id;
        self
    }

    /// Location of the match, if any
    #[must_use]
    pub fn matched_location(&self) -> Option<Location> {
        self.matched.as_ref().map(|m| m.location)
    }

    /// Matched term, if any
    #[must_use]
    pub fn matched_term(&self) -> Option<&str> {
        self.matched.as_ref().map(|m| m.term.as_str())
    }
}
