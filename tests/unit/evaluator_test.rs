//! Tests for pull request evaluation
//!
//! Covers section ordering, location ordering and lazy commit fetching.

use wipguard::WipError;
use wipguard::core::models::{Location, ResolvedConfig, Section};
use wipguard::core::services::evaluate;

use crate::common::{CountingCommits, PrBuilder, pr};

fn custom(sections: Vec<Section>) -> ResolvedConfig {
    ResolvedConfig {
        sections,
        used_custom_config: true,
    }
}

fn section(terms: &[&str], locations: &[Location]) -> Section {
    Section::new(terms.iter().map(ToString::to_string).collect(), locations.to_vec())
}

#[test]
fn wip_title_with_defaults() {
    let commits = CountingCommits::new(&[]);
    let state = evaluate(&pr("WIP: add login"), &commits, ResolvedConfig::builtin()).unwrap();

    assert!(state.wip);
    assert!(!state.overridden);
    assert_eq!(state.matched_location(), Some(Location::Title));
    assert_eq!(state.matched_term(), Some("WIP"));
    assert_eq!(commits.calls(), 0);
}

#[test]
fn label_match_after_clean_title() {
    let pr = PrBuilder::new("Add login").label("bug").label("do-not-merge").build();
    let state = evaluate(&pr, &CountingCommits::new(&[]), ResolvedConfig::builtin()).unwrap();

    let matched = state.matched.unwrap();
    assert_eq!(matched.location, Location::Label);
    assert_eq!(matched.text, "do-not-merge");
}

#[test]
fn clean_pull_request_is_ready() {
    let state =
        evaluate(&pr("Add whippet breed"), &CountingCommits::new(&[]), ResolvedConfig::builtin())
            .unwrap();
    assert!(!state.wip);
    assert!(state.matched.is_none());
    assert_eq!(state.sections, vec![Section::default()]);
}

#[test]
fn override_skips_matching() {
    let pr = PrBuilder::new("WIP: add login").body("@WIP ready for review").build();
    let commits = CountingCommits::new(&["fixup! a"]);
    let config = custom(vec![section(&["fixup!"], &[Location::Commit])]);

    let state = evaluate(&pr, &commits, config).unwrap();
    assert!(!state.wip);
    assert!(state.overridden);
    assert!(state.sections.is_empty());
    assert_eq!(commits.calls(), 0);
}

#[test]
fn commits_fetched_once_for_many_sections() {
    let commits = CountingCommits::new(&["feat: a", "chore: b"]);
    let config = custom(vec![
        section(&["fixup!"], &[Location::Commit]),
        section(&["squash!"], &[Location::Commit]),
        section(&["wip"], &[Location::Title, Location::Commit]),
    ]);

    let state = evaluate(&pr("Add login"), &commits, config).unwrap();
    assert!(!state.wip);
    assert_eq!(commits.calls(), 1);
}

#[test]
fn commits_not_fetched_when_title_matches_first() {
    let commits = CountingCommits::failing();
    let config = custom(vec![
        section(&["draft"], &[Location::Title]),
        section(&["fixup!"], &[Location::Commit]),
    ]);

    let state = evaluate(&pr("Draft: login"), &commits, config).unwrap();
    assert!(state.wip);
    assert_eq!(commits.calls(), 0);
}

#[test]
fn commit_subject_match() {
    let commits = CountingCommits::new(&["feat: login", "fixup! feat: login"]);
    let config = custom(vec![section(&["fixup!", "squash!"], &[Location::Commit])]);

    let state = evaluate(&pr("Add login"), &commits, config).unwrap();
    let matched = state.matched.unwrap();
    assert_eq!(matched.location, Location::Commit);
    assert_eq!(matched.text, "fixup! feat: login");
    assert_eq!(matched.term, "fixup!");
}

#[test]
fn first_matching_section_wins() {
    let pr = PrBuilder::new("rfc: parser").label("⛔").build();
    let config = custom(vec![
        section(&["⛔"], &[Location::Label]),
        section(&["rfc"], &[Location::Title]),
    ]);

    let state = evaluate(&pr, &CountingCommits::new(&[]), config).unwrap();
    assert_eq!(state.matched_location(), Some(Location::Label));
    assert_eq!(state.matched_term(), Some("⛔"));
}

#[test]
fn title_beats_label_within_section() {
    let pr = PrBuilder::new("WIP login").label("rfc").build();
    let state = evaluate(&pr, &CountingCommits::new(&[]), ResolvedConfig::builtin()).unwrap();
    assert_eq!(state.matched_location(), Some(Location::Title));
}

#[test]
fn failed_commit_fetch_is_an_error() {
    let config = custom(vec![section(&["fixup!"], &[Location::Commit])]);
    let err = evaluate(&pr("Add login"), &CountingCommits::failing(), config).unwrap_err();
    assert!(matches!(err, WipError::CommitFetch(ref msg) if msg.contains("rate limited")));
}
