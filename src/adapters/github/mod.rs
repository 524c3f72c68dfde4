//! GitHub REST adapter
//!
//! Implements every port over the GitHub REST API with a blocking
//! `reqwest` client: the configuration file is read at the pull request
//! head, commits come from the pull request commit list, and check runs are
//! listed, created and updated on the head commit.

mod payload;

use std::time::Duration;

use anyhow::{Context, anyhow};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::adapters::memory::subject_line;
use crate::core::models::{CheckRecord, CheckRunWrite};
use crate::core::ports::{CheckRunStore, CommitSource, ContentSource, FetchError};

use payload::{CheckRunList, CreateCheckRun, CreatedCheckRun, PullCommit, UpdateCheckRun};

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const PAGE_SIZE: usize = 100;

/// Client for one repository
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    owner: String,
    repo: String,
    content_ref: Option<String>,
}

impl GitHubClient {
    /// Create a client for `owner/repo` authenticated with `token`
    pub fn new(api_url: &str, token: &str, owner: &str, repo: &str) -> anyhow::Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("token contains characters not allowed in a header")?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("wipguard/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            content_ref: None,
        })
    }

    /// Read repository contents at this ref (a commit sha or branch)
    #[must_use]
    pub fn with_content_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.content_ref = Some(git_ref.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/repos/{}/{}/{path}", self.api_url, self.owner, self.repo)
    }

    fn send(&self, request: RequestBuilder, what: &str) -> anyhow::Result<Response> {
        let response = request.send().with_context(|| format!("{what}: request failed"))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(anyhow!("{what}: {status} {}", api_message(&body)))
    }
}

impl ContentSource for GitHubClient {
    fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let mut request = self
            .http
            .get(self.url(&format!("contents/{}", path.trim_start_matches('/'))))
            .header(ACCEPT, "application/vnd.github.raw+json");
        if let Some(git_ref) = &self.content_ref {
            request = request.query(&[("ref", git_ref)]);
        }

        let response = request
            .send()
            .with_context(|| format!("fetch {path}: request failed"))?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(FetchError::NotFound(path.to_string())),
            status if status.is_success() => {
                Ok(response.text().with_context(|| format!("fetch {path}: unreadable body"))?)
            },
            status => {
                let body = response.text().unwrap_or_default();
                Err(FetchError::Other(anyhow!("fetch {path}: {status} {}", api_message(&body))))
            },
        }
    }
}

impl CommitSource for GitHubClient {
    fn commit_subjects(&self, pr_number: u64) -> anyhow::Result<Vec<String>> {
        let mut subjects = Vec::new();
        for page in 1.. {
            let request = self
                .http
                .get(self.url(&format!("pulls/{pr_number}/commits")))
                .query(&[("per_page", PAGE_SIZE), ("page", page)]);
            let commits: Vec<PullCommit> =
                self.send(request, "list pull request commits")?.json()?;

            let count = commits.len();
            subjects.extend(commits.iter().map(|c| subject_line(&c.commit.message).to_string()));
            if count < PAGE_SIZE {
                break;
            }
        }
        Ok(subjects)
    }
}

impl CheckRunStore for GitHubClient {
    fn list_for_ref(&self, head_sha: &str, check_name: &str) -> anyhow::Result<Vec<CheckRecord>> {
        let request = self
            .http
            .get(self.url(&format!("commits/{head_sha}/check-runs")))
            .query(&[("check_name", check_name)]);
        let list: CheckRunList = self.send(request, "list check runs")?.json()?;
        Ok(list.check_runs.into_iter().map(CheckRecord::from).collect())
    }

    fn create(&self, run: &CheckRunWrite) -> anyhow::Result<u64> {
        let request = self.http.post(self.url("check-runs")).json(&CreateCheckRun::from(run));
        let created: CreatedCheckRun = self.send(request, "create check run")?.json()?;
        Ok(created.id)
    }

    fn update(&self, id: u64, run: &CheckRunWrite) -> anyhow::Result<()> {
        let request = self
            .http
            .patch(self.url(&format!("check-runs/{id}")))
            .json(&UpdateCheckRun::from(run));
        self.send(request, "update check run")?;
        Ok(())
    }
}

/// Extract `message` from a GitHub error body, falling back to the raw body
fn api_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(ToString::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
