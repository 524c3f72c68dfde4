//! Output formatting for human and JSON modes
//!
//! Every command result can be rendered either as human-readable text or as
//! machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{CheckOutput, EvaluationState};
use crate::core::services::pass::{PassAction, PassReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of an offline evaluation
#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    /// Pull request number
    pub pull_request: u64,
    /// Evaluated state
    pub state: EvaluationState,
    /// Output a check run would carry
    pub output: CheckOutput,
}

impl EvaluationReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut text = format!("Pull request #{}\n", self.pull_request);
        text.push_str(&describe_state(&self.state, &self.output));
        text
    }
}

/// Result of a live pass
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Pull request number
    pub pull_request: u64,
    /// Check run name
    pub check_name: String,
    /// The pass outcome
    #[serde(flatten)]
    pub pass: PassReport,
}

impl RunReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable text
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut text = format!("Pull request #{}, check \"{}\"\n", self.pull_request, self.check_name);
        text.push_str(&describe_state(&self.pass.state, &self.pass.output));
        let action = match self.pass.action {
            PassAction::Created(id) => format!("created check run {id}"),
            PassAction::Updated(id) => format!("updated check run {id}"),
            PassAction::Unchanged => "status not changed".to_string(),
            PassAction::DryRun => "dry run, nothing written".to_string(),
        };
        text.push_str(&format!("  {} {action}\n", "→".dimmed()));
        text
    }
}

/// A trigger that did not warrant a pass
#[derive(Debug, Serialize)]
pub struct SkipReport {
    /// Always true, for scripts
    pub skipped: bool,
    /// Why nothing was evaluated
    pub reason: String,
}

impl SkipReport {
    /// A skip with this reason
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            skipped: true,
            reason: reason.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("Skipped: {}", self.reason),
            OutputMode::Json => render_json(self),
        }
    }
}

fn describe_state(state: &EvaluationState, output: &CheckOutput) -> String {
    let badge = if state.wip {
        "WIP".yellow().bold()
    } else {
        "READY".green().bold()
    };
    let mut text = format!("  {badge} {}\n", output.title);

    if let Some(m) = &state.matched {
        text.push_str(&format!("  matched \"{}\" in {}: {}\n", m.term, m.location.describe(), m.text));
    }
    if state.overridden {
        text.push_str("  override marker found in the description\n");
    }
    if state.used_custom_config {
        text.push_str(&format!("  {} section(s) from custom configuration\n", state.sections.len()));
    }
    text
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
