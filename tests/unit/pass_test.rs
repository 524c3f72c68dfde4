//! Tests for full evaluation passes against in-memory ports
//!
//! Each pass runs against the check runs left by the previous one, the way
//! consecutive webhook triggers do.

use std::time::Duration;

use wipguard::WipError;
use wipguard::core::models::{CheckStatus, Conclusion, PullRequest};
use wipguard::core::services::{PassAction, PassOptions, Ports, RetryPolicy, run_pass};

use crate::common::{CountingCommits, InMemoryChecks, InMemoryContent, PrBuilder, pr};

const CONFIG: &str = ".github/wip.yml";

fn options() -> PassOptions {
    PassOptions {
        config_path: Some(CONFIG.to_string()),
        retry: RetryPolicy {
            retries: 3,
            backoff: Duration::ZERO,
        },
        ..PassOptions::default()
    }
}

fn pass(
    pr: &PullRequest,
    content: &InMemoryContent,
    commits: &CountingCommits,
    checks: &InMemoryChecks,
    options: &PassOptions,
) -> wipguard::Result<PassAction> {
    let ports = Ports {
        content,
        commits,
        checks,
    };
    run_pass(pr, ports, options).map(|report| report.action)
}

#[test]
fn first_pass_creates_in_progress_check() {
    let checks = InMemoryChecks::new();
    let action = pass(
        &pr("WIP: login"),
        &InMemoryContent::new(),
        &CountingCommits::new(&[]),
        &checks,
        &options(),
    )
    .unwrap();

    assert_eq!(action, PassAction::Created(100));
    let writes = checks.writes();
    assert_eq!(writes.len(), 1);
    let (prior, write) = &writes[0];
    assert_eq!(*prior, None);
    assert_eq!(write.name, "WIP");
    assert_eq!(write.head_sha, "0123abcd");
    assert_eq!(write.status, CheckStatus::InProgress);
    assert_eq!(write.conclusion, None);
    assert!(write.started_at.is_some());
    assert!(write.completed_at.is_none());
    assert!(write.external_id.starts_with("[WIP]"));
    assert_eq!(write.output.title, "Title contains \"WIP\"");
}

#[test]
fn repeated_pass_writes_nothing() {
    let content = InMemoryContent::new();
    let commits = CountingCommits::new(&[]);
    let checks = InMemoryChecks::new();
    let pr = pr("WIP: login");

    pass(&pr, &content, &commits, &checks, &options()).unwrap();
    let action = pass(&pr, &content, &commits, &checks, &options()).unwrap();

    assert_eq!(action, PassAction::Unchanged);
    assert_eq!(checks.writes().len(), 1);
}

#[test]
fn flip_to_ready_updates_same_check() {
    let content = InMemoryContent::new();
    let commits = CountingCommits::new(&[]);
    let checks = InMemoryChecks::new();

    pass(&pr("WIP: login"), &content, &commits, &checks, &options()).unwrap();
    let action = pass(&pr("Add login"), &content, &commits, &checks, &options()).unwrap();

    assert_eq!(action, PassAction::Updated(100));
    let writes = checks.writes();
    assert_eq!(writes.len(), 2);
    let (prior, write) = &writes[1];
    assert_eq!(*prior, Some(100));
    assert_eq!(write.status, CheckStatus::Completed);
    assert_eq!(write.conclusion, Some(Conclusion::Success));
    assert!(write.completed_at.is_some());
    assert_eq!(write.external_id, writes[0].1.external_id);
    assert_eq!(write.output.title, "Ready for review");

    let again = pass(&pr("Add login"), &content, &commits, &checks, &options()).unwrap();
    assert_eq!(again, PassAction::Unchanged);
}

#[test]
fn override_is_idempotent() {
    let content = InMemoryContent::new();
    let commits = CountingCommits::new(&[]);
    let checks = InMemoryChecks::new();
    let pr = PrBuilder::new("WIP: override login").body("@wip ready for review").build();

    assert_eq!(pass(&pr, &content, &commits, &checks, &options()).unwrap(), PassAction::Created(100));
    assert_eq!(pass(&pr, &content, &commits, &checks, &options()).unwrap(), PassAction::Unchanged);
    assert_eq!(checks.writes()[0].1.output.title, "Ready for review (override)");
}

#[test]
fn changed_term_alone_is_not_rewritten() {
    let content = InMemoryContent::new();
    let commits = CountingCommits::new(&[]);
    let checks = InMemoryChecks::new();

    pass(&pr("WIP: login"), &content, &commits, &checks, &options()).unwrap();
    let action = pass(&pr("RFC: login"), &content, &commits, &checks, &options()).unwrap();
    assert_eq!(action, PassAction::Unchanged);
}

#[test]
fn custom_config_drives_commit_matching() {
    let content = InMemoryContent::new().with_file(CONFIG, "terms: [fixup!, squash!]\nlocations: commit\n");
    let commits = CountingCommits::new(&["feat: a", "squash! feat: a"]);
    let checks = InMemoryChecks::new();

    pass(&pr("WIP: login"), &content, &commits, &checks, &options()).unwrap();

    let write = &checks.writes()[0].1;
    assert_eq!(write.output.title, "Commit subject contains \"squash!\"");
    assert_eq!(commits.calls(), 1);
}

#[test]
fn transient_write_failures_are_retried() {
    let checks = InMemoryChecks::new().failing_writes(2);
    let action = pass(
        &pr("WIP: login"),
        &InMemoryContent::new(),
        &CountingCommits::new(&[]),
        &checks,
        &options(),
    )
    .unwrap();
    assert_eq!(action, PassAction::Created(100));
}

#[test]
fn exhausted_retries_surface_upstream_error() {
    let checks = InMemoryChecks::new().failing_writes(10);
    let err = pass(
        &pr("WIP: login"),
        &InMemoryContent::new(),
        &CountingCommits::new(&[]),
        &checks,
        &options(),
    )
    .unwrap_err();

    assert!(matches!(err, WipError::UpstreamWrite { attempts: 4, .. }));
    assert!(checks.writes().is_empty());
}

#[test]
fn dry_run_computes_without_writing() {
    let checks = InMemoryChecks::new();
    let options = PassOptions {
        dry_run: true,
        ..options()
    };
    let action = pass(
        &pr("WIP: login"),
        &InMemoryContent::new(),
        &CountingCommits::new(&[]),
        &checks,
        &options,
    )
    .unwrap();

    assert_eq!(action, PassAction::DryRun);
    assert!(checks.writes().is_empty());
}

#[test]
fn config_fetch_failure_writes_nothing() {
    let checks = InMemoryChecks::new();
    let err = pass(
        &pr("WIP: login"),
        &InMemoryContent::broken(),
        &CountingCommits::new(&[]),
        &checks,
        &options(),
    )
    .unwrap_err();

    assert_eq!(err.code(), "CONFIG_FETCH");
    assert!(checks.writes().is_empty());
}

#[test]
fn commit_fetch_failure_writes_nothing() {
    let content = InMemoryContent::new().with_file(CONFIG, "locations: commit\n");
    let checks = InMemoryChecks::new();
    let err = pass(&pr("Add login"), &content, &CountingCommits::failing(), &checks, &options())
        .unwrap_err();

    assert_eq!(err.code(), "COMMIT_FETCH");
    assert!(checks.writes().is_empty());
}
