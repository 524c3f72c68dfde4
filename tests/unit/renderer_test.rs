//! Tests for check run output rendering

use wipguard::core::models::{EvaluationState, Location, ResolvedConfig, Section, TermMatch};
use wipguard::core::services::{OVERRIDE_MARKER, RenderOptions, render};

fn wip_state(config: ResolvedConfig, location: Location, text: &str, term: &str) -> EvaluationState {
    EvaluationState::work_in_progress(
        config,
        TermMatch {
            location,
            text: text.to_string(),
            term: term.to_string(),
        },
    )
}

fn with_url() -> RenderOptions {
    RenderOptions {
        pr_url: Some("https://github.com/octo/app/pull/42".to_string()),
        ..RenderOptions::default()
    }
}

#[test]
fn summary_links_description() {
    let state = wip_state(ResolvedConfig::builtin(), Location::Title, "WIP: x", "WIP");
    let summary = render(&state, &with_url()).summary.unwrap();
    assert!(summary.contains("[pull request description](https://github.com/octo/app/pull/42#discussion_bucket)"));
    assert!(summary.contains(OVERRIDE_MARKER));
}

#[test]
fn default_config_is_shown_for_builtin_match() {
    let state = wip_state(ResolvedConfig::builtin(), Location::Label, "rfc", "rfc");
    let text = render(&state, &RenderOptions::default()).text.unwrap();
    assert!(text.contains("```yml\nterms:\n  - wip\n"));
    assert!(text.contains("locations:\n  - title\n  - label\n"));
}

#[test]
fn custom_config_is_tabulated() {
    let config = ResolvedConfig {
        sections: vec![
            Section::new(vec!["⛔".to_string()], vec![Location::Title, Location::Label]),
            Section::new(vec!["fixup!".to_string(), "squash!".to_string()], vec![Location::Commit]),
        ],
        used_custom_config: true,
    };
    let state = wip_state(config, Location::Commit, "fixup! a", "fixup!");
    let output = render(&state, &RenderOptions::default());

    assert_eq!(output.title, "Commit subject contains \"fixup!\"");
    let text = output.text.unwrap();
    assert!(text.starts_with("The following configuration was applied:"));
    assert!(text.contains("| ⛔ | title, label |"));
    assert!(text.contains("| fixup!, squash! | commit |"));
}

#[test]
fn ready_desc_is_configurable() {
    let options = RenderOptions {
        ready_desc: "good to go".to_string(),
        pr_url: None,
    };
    let output = render(&EvaluationState::ready(ResolvedConfig::builtin()), &options);
    assert_eq!(output.title, "Good to go");

    let output = render(&EvaluationState::overridden(), &options);
    assert_eq!(output.title, "Good to go (override)");
}

#[test]
fn rendering_is_deterministic() {
    let state = wip_state(ResolvedConfig::builtin(), Location::Title, "🚧 x", "🚧");
    assert_eq!(render(&state, &with_url()), render(&state, &with_url()));
}
