//! Evaluate command - offline evaluation of an event payload

use std::path::Path;

use anyhow::bail;

use wipguard::adapters::file::LocalContentSource;
use wipguard::adapters::memory::FixedCommits;
use wipguard::core::services::{RenderOptions, evaluate as evaluate_pr, render, resolve};
use wipguard::event::load_event;
use wipguard::output::{EvaluationReport, OutputMode};

/// Evaluate a pull request event against a local configuration file
///
/// Commit subjects are taken from `commits` since nothing is fetched.
pub fn evaluate(
    event_path: &Path,
    config_file: Option<&Path>,
    commits: &[String],
    ready_desc: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let Some(event) = load_event(event_path)? else {
        bail!("{} has no pull_request object", event_path.display());
    };
    let pr = event.pull_request;

    let (source, config_path) = match config_file {
        Some(file) => {
            let root = file.parent().unwrap_or_else(|| Path::new("."));
            let name = file.file_name().map(|n| n.to_string_lossy().into_owned());
            (LocalContentSource::new(root), name)
        },
        None => (LocalContentSource::new("."), None),
    };
    let config = resolve(&source, config_path.as_deref())?;
    if config_file.is_some() && !config.used_custom_config {
        log::warn!("configuration file not usable, using the default section");
    }

    let state = evaluate_pr(&pr, &FixedCommits::new(commits), config)?;

    let mut options = RenderOptions {
        pr_url: pr.html_url.clone(),
        ..RenderOptions::default()
    };
    if let Some(desc) = ready_desc.filter(|d| !d.trim().is_empty()) {
        options.ready_desc = desc.to_string();
    }
    let output = render(&state, &options);

    EvaluationReport {
        pull_request: pr.number,
        state,
        output,
    }
    .render(mode);

    Ok(())
}
