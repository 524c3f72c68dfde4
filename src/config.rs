//! Runtime settings
//!
//! Settings come from command-line flags, which fall back to the
//! environment variables GitHub Actions provides (see the CLI for the
//! exact names). [`Settings::from_input`] validates them once, so the rest
//! of the run can rely on well-formed values.

use std::path::PathBuf;

use crate::adapters::github::DEFAULT_API_URL;
use crate::core::services::pass::{DEFAULT_CHECK_NAME, PassOptions, RetryPolicy};
use crate::core::services::renderer::{DEFAULT_READY_DESC, RenderOptions};
use crate::error::{Result, WipError};

/// Event name that carries pull request payloads
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Raw, unvalidated settings
#[derive(Debug, Clone, Default)]
pub struct SettingsInput {
    /// API token
    pub token: Option<String>,
    /// Repository slug, `owner/name`
    pub repository: Option<String>,
    /// Path of the event payload file
    pub event_path: Option<PathBuf>,
    /// Name of the triggering event
    pub event_name: Option<String>,
    /// API base URL
    pub api_url: Option<String>,
    /// Configuration file path in the repository
    pub config_path: Option<String>,
    /// Check run name
    pub check_name: Option<String>,
    /// Description of the ready state
    pub ready_desc: Option<String>,
}

/// Validated settings for a live run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// API token
    pub token: String,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path of the event payload file
    pub event_path: PathBuf,
    /// Name of the triggering event
    pub event_name: String,
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Configuration file path in the repository
    pub config_path: Option<String>,
    /// Check run name
    pub check_name: String,
    /// Description of the ready state
    pub ready_desc: String,
}

impl Settings {
    /// Validate raw settings
    pub fn from_input(input: SettingsInput) -> Result<Self> {
        let token = non_blank(input.token)
            .ok_or_else(|| WipError::Settings("an API token is required (GITHUB_TOKEN)".to_string()))?;
        let repository = non_blank(input.repository).ok_or_else(|| {
            WipError::Settings("a repository is required (GITHUB_REPOSITORY)".to_string())
        })?;
        let (owner, repo) = parse_repository(&repository)?;
        let event_path = input
            .event_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                WipError::Settings("an event payload is required (GITHUB_EVENT_PATH)".to_string())
            })?;

        Ok(Self {
            token,
            owner,
            repo,
            event_path,
            event_name: non_blank(input.event_name).unwrap_or_else(|| PULL_REQUEST_EVENT.to_string()),
            api_url: non_blank(input.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            config_path: non_blank(input.config_path),
            check_name: non_blank(input.check_name).unwrap_or_else(|| DEFAULT_CHECK_NAME.to_string()),
            ready_desc: non_blank(input.ready_desc).unwrap_or_else(|| DEFAULT_READY_DESC.to_string()),
        })
    }

    /// Whether the triggering event is a pull request event
    #[must_use]
    pub fn is_pull_request_event(&self) -> bool {
        self.event_name == PULL_REQUEST_EVENT
    }

    /// Pass options derived from these settings
    #[must_use]
    pub fn pass_options(&self, dry_run: bool) -> PassOptions {
        PassOptions {
            check_name: self.check_name.clone(),
            config_path: self.config_path.clone(),
            render: RenderOptions {
                ready_desc: self.ready_desc.clone(),
                pr_url: None,
            },
            retry: RetryPolicy::default(),
            dry_run,
        }
    }
}

/// Split an `owner/name` slug
pub fn parse_repository(slug: &str) -> Result<(String, String)> {
    match slug.trim().split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok((owner.to_string(), name.to_string()))
        },
        _ => Err(WipError::Settings(format!(
            "invalid repository '{slug}', expected owner/name"
        ))),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
