//! Output renderer service - turns an evaluation state into check run text
//!
//! Pure and deterministic: the same state and options always render the
//! same output.

use std::fmt::Write as _;

use crate::core::models::{CheckOutput, EvaluationState, Location, Section, TermMatch};
use crate::core::services::emoji::emoji_name;
use crate::core::services::evaluator::OVERRIDE_MARKER;

/// Default description of the ready state
pub const DEFAULT_READY_DESC: &str = "ready for review";

/// Rendering knobs that do not come from the evaluation itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Description of the ready state, used as the title when ready
    pub ready_desc: String,
    /// Pull request web URL, linked from the summary
    pub pr_url: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            ready_desc: DEFAULT_READY_DESC.to_string(),
            pr_url: None,
        }
    }
}

/// Render the check run output for a state
#[must_use]
pub fn render(state: &EvaluationState, options: &RenderOptions) -> CheckOutput {
    let mut output = match state.matched.as_ref().filter(|_| state.wip) {
        Some(matched) => render_match(matched, options),
        None => CheckOutput {
            title: ucfirst(&options.ready_desc),
            summary: None,
            text: None,
        },
    };

    if state.overridden {
        output.title.push_str(" (override)");
        output.summary = Some(format!(
            "The status has been set to success by adding `{OVERRIDE_MARKER}` to the pull request \
             description. You can reset the status by removing it."
        ));
    } else if state.used_custom_config {
        output.text = Some(format!(
            "The following configuration was applied:\n\n{}\n{}",
            sections_table(&state.sections),
            usage_notes()
        ));
    }

    output
}

fn render_match(matched: &TermMatch, options: &RenderOptions) -> CheckOutput {
    let phrase = describe_term(&matched.term);
    let location = matched.location.describe();

    let description = options.pr_url.as_deref().map_or_else(
        || "pull request description".to_string(),
        |url| format!("[pull request description]({url}#discussion_bucket)"),
    );

    CheckOutput {
        title: format!("{} contains {phrase}", ucfirst(location)),
        summary: Some(format!(
            "The {location} \"{}\" contains {phrase}.\n\nYou can override the status by adding \
             \"{OVERRIDE_MARKER}\" to the end of the {description}.",
            matched.text
        )),
        text: Some(format!(
            "The default configuration is applied:\n\n{}\n{}",
            default_config_yaml(),
            usage_notes()
        )),
    }
}

/// "a construction emoji" for known emoji, the quoted term otherwise
#[must_use]
pub fn describe_term(term: &str) -> String {
    emoji_name(term).map_or_else(|| format!("\"{term}\""), |name| format!("a {name} emoji"))
}

/// Markdown table listing every section
#[must_use]
pub fn sections_table(sections: &[Section]) -> String {
    let mut table = String::from("| terms | locations |\n|-------|-----------|\n");
    for section in sections {
        let locations: Vec<&str> = section.locations.iter().map(|l| l.as_str()).collect();
        let _ = writeln!(table, "| {} | {} |", section.terms.join(", "), locations.join(", "));
    }
    table
}

fn default_config_yaml() -> String {
    let section = Section::default();
    let mut yaml = String::from("```yml\nterms:\n");
    for term in &section.terms {
        let _ = writeln!(yaml, "  - {term}");
    }
    yaml.push_str("locations:\n");
    for location in &section.locations {
        let _ = writeln!(yaml, "  - {location}");
    }
    yaml.push_str("```\n");
    yaml
}

fn usage_notes() -> String {
    let locations = Location::ALL.map(Location::as_str).join("`, `");
    format!(
        "Terms are matched case-insensitively in the configured locations (`{locations}`). \
         Create a configuration file to change them, either as one section or as a list of \
         sections checked in order:\n\n\
         ```yml\n\
         - terms: ⛔\n  locations:\n    - title\n    - label\n\
         - terms:\n    - fixup!\n    - squash!\n  locations: commit\n\
         ```\n\n\
         Terms made only of non-word characters, such as emoji, match anywhere. Other terms \
         only match when surrounded by the start or end of the text or by non-word characters.\n"
    )
}

fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
