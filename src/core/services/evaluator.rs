//! Status evaluator service - decides whether a pull request is a work in progress
//!
//! One pass, terminal on the first decision:
//!
//! 1. The override marker in the description wins over everything.
//! 2. Sections are tried in declaration order; the first that matches ends
//!    the pass.
//! 3. Within a section the title is probed first, then each label, then each
//!    commit subject.
//!
//! Commit subjects cost a network round trip, so they are fetched only when a
//! section that searches commits gets that far, and at most once per pass.

use crate::core::models::{EvaluationState, Location, PullRequest, ResolvedConfig};
use crate::core::ports::CommitSource;
use crate::core::services::matcher::SectionMatcher;
use crate::error::{Result, WipError};

/// Phrase in the description that forces the ready state (case-insensitive)
pub const OVERRIDE_MARKER: &str = "@wip ready for review";

/// Whether a description contains the override marker
#[must_use]
pub fn has_override(body: &str) -> bool {
    body.to_lowercase().contains(OVERRIDE_MARKER)
}

/// Commit subjects, fetched on first use and reused for the rest of the pass
struct CommitSubjects<'a> {
    source: &'a dyn CommitSource,
    pr_number: u64,
    cached: Option<Vec<String>>,
}

impl<'a> CommitSubjects<'a> {
    const fn new(source: &'a dyn CommitSource, pr_number: u64) -> Self {
        Self {
            source,
            pr_number,
            cached: None,
        }
    }

    fn get(&mut self) -> Result<&[String]> {
        let subjects = match self.cached.take() {
            Some(subjects) => subjects,
            None => {
                let subjects = self
                    .source
                    .commit_subjects(self.pr_number)
                    .map_err(|e| WipError::CommitFetch(format!("{e:#}")))?;
                log::debug!("fetched {} commit subject(s) for #{}", subjects.len(), self.pr_number);
                subjects
            },
        };
        Ok(self.cached.insert(subjects))
    }
}

/// Evaluate a pull request against resolved sections
///
/// Fails only when commit subjects are needed and cannot be fetched.
pub fn evaluate(
    pr: &PullRequest,
    commits: &dyn CommitSource,
    config: ResolvedConfig,
) -> Result<EvaluationState> {
    if has_override(&pr.body) {
        log::debug!("override marker found in #{}", pr.number);
        return Ok(EvaluationState::overridden());
    }

    log::debug!(
        "evaluating #{} against {} section(s), commits searched: {}",
        pr.number,
        config.sections.len(),
        config.needs_commits()
    );
    let mut subjects = CommitSubjects::new(commits, pr.number);
    let mut found = None;

    for (index, section) in config.sections.iter().enumerate() {
        let matcher = SectionMatcher::new(section)
            .map_err(|e| WipError::ConfigParse(format!("section #{}: {e}", index + 1)))?;

        let hit = match matcher
            .probe(Location::Title, std::slice::from_ref(&pr.title))
            .or_else(|| matcher.probe(Location::Label, &pr.labels))
        {
            Some(hit) => Some(hit),
            None if matcher.covers(Location::Commit) => {
                matcher.probe(Location::Commit, subjects.get()?)
            },
            None => None,
        };

        if let Some(hit) = hit {
            log::debug!("section #{} matched {:?} in {}", index + 1, hit.term, hit.location);
            found = Some(hit);
            break;
        }
    }

    Ok(match found {
        Some(hit) => EvaluationState::work_in_progress(config, hit),
        None => EvaluationState::ready(config),
    })
}
