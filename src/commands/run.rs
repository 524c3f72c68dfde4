//! Run command - one live pass for the triggering pull request

use wipguard::adapters::github::GitHubClient;
use wipguard::config::{Settings, SettingsInput};
use wipguard::core::services::{Ports, run_pass};
use wipguard::event::load_event;
use wipguard::output::{OutputMode, RunReport, SkipReport};

/// Evaluate the pull request from the event payload and publish the verdict
pub fn run(input: SettingsInput, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    let settings = Settings::from_input(input)?;

    if !settings.is_pull_request_event() {
        log::info!("event {} is not a pull request event, skipping", settings.event_name);
        SkipReport::new(format!("event {} is not handled", settings.event_name)).render(mode);
        return Ok(());
    }

    let Some(event) = load_event(&settings.event_path)? else {
        log::info!("event payload has no pull request, skipping");
        SkipReport::new("event payload has no pull request").render(mode);
        return Ok(());
    };

    if !event.triggers_pass() {
        let action = event.action.as_deref().unwrap_or("(none)");
        log::info!("action {action} does not affect readiness, skipping");
        SkipReport::new(format!("action {action} is not handled")).render(mode);
        return Ok(());
    }

    let pr = event.pull_request;
    log::info!(
        "evaluating {}/{}#{} at {}",
        settings.owner,
        settings.repo,
        pr.number,
        pr.head_sha
    );

    let client = GitHubClient::new(&settings.api_url, &settings.token, &settings.owner, &settings.repo)?
        .with_content_ref(pr.head_sha.clone());
    let ports = Ports {
        content: &client,
        commits: &client,
        checks: &client,
    };

    let pass = run_pass(&pr, ports, &settings.pass_options(dry_run))?;
    RunReport {
        pull_request: pr.number,
        check_name: settings.check_name,
        pass,
    }
    .render(mode);

    Ok(())
}
