//! Pass orchestration - one full evaluation for one trigger
//!
//! resolve config → evaluate → read prior check run → reconcile → render →
//! write (only when the published state changes).
//!
//! Nothing is written unless every read succeeded, and a failed write leaves
//! the previous check run untouched, so the next trigger starts clean.

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::models::{
    CheckOutput, CheckRunWrite, CheckStatus, Conclusion, EvaluationState, PullRequest,
};
use crate::core::ports::{CheckRunStore, CommitSource, ContentSource};
use crate::core::services::evaluator::evaluate;
use crate::core::services::reconciler::{Reconciliation, namespace_tag, reconcile};
use crate::core::services::renderer::{RenderOptions, render};
use crate::core::services::resolver::resolve;
use crate::error::{Result, WipError};

/// Default check run name
pub const DEFAULT_CHECK_NAME: &str = "WIP";

/// Platform collaborators used by a pass
#[derive(Clone, Copy)]
pub struct Ports<'a> {
    /// Repository contents (configuration file)
    pub content: &'a dyn ContentSource,
    /// Pull request commits
    pub commits: &'a dyn CommitSource,
    /// Check runs
    pub checks: &'a dyn CheckRunStore,
}

impl std::fmt::Debug for Ports<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ports").finish_non_exhaustive()
    }
}

/// Fixed-count, fixed-delay retry for check run writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retries: u32,
    /// Delay between attempts
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            backoff: Duration::from_secs(3),
        }
    }
}

/// Settings for one pass
#[derive(Debug, Clone)]
pub struct PassOptions {
    /// Check run name; also defines the external id namespace
    pub check_name: String,
    /// Configuration file path in the repository
    pub config_path: Option<String>,
    /// Rendering knobs
    pub render: RenderOptions,
    /// Write retry policy
    pub retry: RetryPolicy,
    /// Compute everything but skip the write
    pub dry_run: bool,
}

impl Default for PassOptions {
    fn default() -> Self {
        Self {
            check_name: DEFAULT_CHECK_NAME.to_string(),
            config_path: None,
            render: RenderOptions::default(),
            retry: RetryPolicy::default(),
            dry_run: false,
        }
    }
}

/// What a pass did to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "check_run_id", rename_all = "snake_case")]
pub enum PassAction {
    /// Created a check run with this id
    Created(u64),
    /// Updated the check run with this id
    Updated(u64),
    /// Published state already matches; nothing written
    Unchanged,
    /// A write was due but the pass ran dry
    DryRun,
}

/// Result of a pass
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    /// Evaluated state
    pub state: EvaluationState,
    /// Rendered output (written only when changed)
    pub output: CheckOutput,
    /// Whether the published state needed a write
    pub changed: bool,
    /// What was done
    pub action: PassAction,
}

/// Run one full pass for a pull request
pub fn run_pass(pr: &PullRequest, ports: Ports<'_>, options: &PassOptions) -> Result<PassReport> {
    let config = resolve(ports.content, options.config_path.as_deref())?;
    let state = evaluate(pr, ports.commits, config)?;
    log::debug!("next state: {state:?}");

    let prior = ports
        .checks
        .list_for_ref(&pr.head_sha, &options.check_name)
        .map_err(|e| WipError::CheckQuery(format!("{e:#}")))?;
    log::debug!("found {} check run(s) named {}", prior.len(), options.check_name);

    let reconciliation = reconcile(&prior, &state, &namespace_tag(&options.check_name));
    let state = state.with_prior_check(reconciliation.prior_id);

    let mut render_options = options.render.clone();
    if render_options.pr_url.is_none() {
        render_options.pr_url.clone_from(&pr.html_url);
    }
    let output = render(&state, &render_options);

    if !reconciliation.changed {
        log::info!("status not changed");
        return Ok(PassReport {
            state,
            output,
            changed: false,
            action: PassAction::Unchanged,
        });
    }

    let write = build_write(pr, &state, &output, &reconciliation, &options.check_name, Utc::now());
    log::debug!("check run write: {write:?}");

    let action = if options.dry_run {
        log::info!("dry run, skipping check run write");
        PassAction::DryRun
    } else {
        publish(ports.checks, &write, reconciliation.prior_id, options.retry)?
    };

    log::info!("{}", if state.wip { "work in progress" } else { "ready for review" });

    Ok(PassReport {
        state,
        output,
        changed: true,
        action,
    })
}

/// Build the check run payload for a state
///
/// A work in progress is an in-progress run; a ready pull request is a
/// completed, successful run.
#[must_use]
pub fn build_write(
    pr: &PullRequest,
    state: &EvaluationState,
    output: &CheckOutput,
    reconciliation: &Reconciliation,
    check_name: &str,
    now: DateTime<Utc>,
) -> CheckRunWrite {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Secs, true);
    let (status, conclusion, started_at, completed_at) = if state.wip {
        (CheckStatus::InProgress, None, Some(timestamp), None)
    } else {
        (CheckStatus::Completed, Some(Conclusion::Success), None, Some(timestamp))
    };

    CheckRunWrite {
        name: check_name.to_string(),
        head_sha: pr.head_sha.clone(),
        status,
        conclusion,
        started_at,
        completed_at,
        external_id: reconciliation.external_id.clone(),
        output: output.clone(),
    }
}

/// Create or update the check run, retrying transient failures
pub fn publish(
    checks: &dyn CheckRunStore,
    write: &CheckRunWrite,
    prior_id: Option<u64>,
    retry: RetryPolicy,
) -> Result<PassAction> {
    match prior_id {
        Some(id) => {
            with_retry(retry, "update check run", || checks.update(id, write))?;
            Ok(PassAction::Updated(id))
        },
        None => with_retry(retry, "create check run", || checks.create(write)).map(PassAction::Created),
    }
}

/// Run `op`, retrying up to `policy.retries` times with a fixed delay
pub fn with_retry<T>(
    policy: RetryPolicy,
    what: &str,
    mut op: impl FnMut() -> anyhow::Result<T>,
) -> Result<T> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        match op() {
            Ok(value) => return Ok(value),
            Err(e) if attempts <= policy.retries => {
                log::warn!("{what} failed (attempt {attempts}): {e:#}, retrying in {:?}", policy.backoff);
                std::thread::sleep(policy.backoff);
            },
            Err(e) => {
                return Err(WipError::UpstreamWrite {
                    attempts,
                    message: format!("{e:#}"),
                });
            },
        }
    }
}
