//! Tests for reconciliation against the published check run

use wipguard::core::models::{
    CheckRecord, Conclusion, EvaluationState, Location, ResolvedConfig, TermMatch,
};
use wipguard::core::services::reconciler::PublishedState;
use wipguard::core::services::{namespace_tag, reconcile};

const NS: &str = "[WIP]";

fn record(id: u64, external_id: Option<&str>, conclusion: Option<Conclusion>, title: &str) -> CheckRecord {
    CheckRecord {
        id,
        external_id: external_id.map(ToString::to_string),
        conclusion,
        output_title: Some(title.to_string()),
    }
}

fn wip() -> EvaluationState {
    EvaluationState::work_in_progress(
        ResolvedConfig::builtin(),
        TermMatch {
            location: Location::Title,
            text: "WIP: x".to_string(),
            term: "WIP".to_string(),
        },
    )
}

fn ready() -> EvaluationState {
    EvaluationState::ready(ResolvedConfig::builtin())
}

#[test]
fn namespace_wraps_check_name() {
    assert_eq!(namespace_tag("WIP"), "[WIP]");
    assert_eq!(namespace_tag("Draft check"), "[Draft check]");
}

#[test]
fn first_pass_creates_with_fresh_id() {
    let result = reconcile(&[], &wip(), NS);
    assert!(result.changed);
    assert!(!result.is_update());
    assert!(result.external_id.starts_with(NS));
    assert!(result.external_id.len() > NS.len());
}

#[test]
fn fresh_ids_are_unique() {
    let a = reconcile(&[], &wip(), NS).external_id;
    let b = reconcile(&[], &wip(), NS).external_id;
    assert_ne!(a, b);
}

#[test]
fn same_state_is_unchanged() {
    let prior = [record(5, Some("[WIP]abc"), None, "Title contains \"WIP\"")];
    let result = reconcile(&prior, &wip(), NS);
    assert!(!result.changed);
    assert_eq!(result.prior_id, Some(5));
    assert_eq!(result.external_id, "[WIP]abc");
}

#[test]
fn flip_to_ready_updates_in_place() {
    let prior = [record(5, Some("[WIP]abc"), None, "Title contains \"WIP\"")];
    let result = reconcile(&prior, &ready(), NS);
    assert!(result.changed);
    assert_eq!(result.prior_id, Some(5));
    assert_eq!(result.external_id, "[WIP]abc");
}

#[test]
fn override_flip_is_a_change() {
    let prior = [record(5, Some("[WIP]abc"), Some(Conclusion::Success), "Ready for review")];
    let result = reconcile(&prior, &EvaluationState::overridden(), NS);
    assert!(result.changed);

    let prior = [record(5, Some("[WIP]abc"), Some(Conclusion::Success), "Ready for review (override)")];
    assert!(!reconcile(&prior, &EvaluationState::overridden(), NS).changed);
    assert!(reconcile(&prior, &ready(), NS).changed);
}

#[test]
fn foreign_records_are_ignored() {
    let prior = [
        record(9, Some("[Other]x"), Some(Conclusion::Success), "Ready"),
        record(8, None, Some(Conclusion::Success), "Ready"),
    ];
    let result = reconcile(&prior, &ready(), NS);
    assert!(result.changed);
    assert_eq!(result.prior_id, None);
}

#[test]
fn most_recent_owned_record_wins() {
    let prior = [
        record(9, Some("[Other]x"), Some(Conclusion::Success), "Ready"),
        record(7, Some("[WIP]new"), Some(Conclusion::Success), "Ready for review"),
        record(3, Some("[WIP]old"), None, "Title contains \"WIP\""),
    ];
    let result = reconcile(&prior, &ready(), NS);
    assert!(!result.changed);
    assert_eq!(result.prior_id, Some(7));
}

#[test]
fn wip_title_mentioning_override_is_not_an_override() {
    let published = PublishedState::from_record(&record(
        1,
        Some("[WIP]a"),
        None,
        "Title contains \"override\"",
    ));
    assert!(published.wip);
    assert!(!published.overridden);
}

#[test]
fn non_success_conclusion_reads_as_wip() {
    let published =
        PublishedState::from_record(&record(1, Some("[WIP]a"), Some(Conclusion::Failure), "x"));
    assert!(published.wip);
}
