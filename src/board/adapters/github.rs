//! GitHub REST adapter for the issue source port.

use crate::board::domain::{Issue, RawEvent};
use crate::board::ports::{IssueSource, IssueSourceError, IssueSourceResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

/// Media type that includes project-card payloads on issue events.
const EVENTS_ACCEPT: &str = "application/vnd.github.starfox-preview+json";
/// Page size used when walking an issue's event history.
const EVENTS_PAGE_SIZE: usize = 100;

/// Connection settings for the GitHub issue source.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubSourceSettings {
    /// API base URL, normally `https://api.github.com`.
    pub api_base: String,
    /// Repository owner login.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Personal access token, if the repository needs one.
    pub token: Option<String>,
    /// Issues served per page.
    pub page_size: usize,
}

/// Issue source backed by the GitHub REST API.
///
/// Serves issues newest-first and fetches each issue's full event history
/// before returning the page. Pull requests surfaced by the issues endpoint
/// are skipped.
pub struct GithubIssueSource {
    http: reqwest::Client,
    settings: GithubSourceSettings,
}

impl GithubIssueSource {
    /// Creates a source with a dedicated HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`IssueSourceError::Transport`] when the client cannot be
    /// constructed.
    pub fn new(settings: GithubSourceSettings) -> IssueSourceResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stagecraft/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(IssueSourceError::transport)?;
        Ok(Self { http, settings })
    }

    fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{tail}",
            self.settings.api_base, self.settings.owner, self.settings.repo
        )
    }

    async fn get_json<T>(&self, url: &str, accept: &str) -> IssueSourceResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.http.get(url).header(reqwest::header::ACCEPT, accept);
        if let Some(token) = &self.settings.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(IssueSourceError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IssueSourceError::Rejected(status.as_u16()));
        }
        response.json().await.map_err(IssueSourceError::decode)
    }

    /// Walks the issue's event history page by page until a short page.
    async fn fetch_events(&self, number: u64) -> IssueSourceResult<Vec<RawEvent>> {
        let mut events = Vec::new();
        let mut page = 1u32;
        loop {
            let url = self.repo_url(&format!(
                "issues/{number}/events?per_page={EVENTS_PAGE_SIZE}&page={page}"
            ));
            let batch: Vec<RawEvent> = self.get_json(&url, EVENTS_ACCEPT).await?;
            let exhausted = batch.len() < EVENTS_PAGE_SIZE;
            events.extend(batch);
            if exhausted {
                break;
            }
            page += 1;
        }
        Ok(events)
    }
}

#[async_trait]
impl IssueSource for GithubIssueSource {
    async fn issues_page(&self, page: u32) -> IssueSourceResult<Vec<Issue>> {
        let url = self.repo_url(&format!(
            "issues?state=all&sort=created&direction=desc&per_page={}&page={page}",
            self.settings.page_size
        ));
        let wire_issues: Vec<WireIssue> = self.get_json(&url, "application/vnd.github+json").await?;
        debug!(page, count = wire_issues.len(), "fetched issue page");

        let mut issues = Vec::with_capacity(wire_issues.len());
        for wire in wire_issues {
            if wire.pull_request.is_some() {
                continue;
            }
            let events = self.fetch_events(wire.number).await?;
            issues.push(wire.into_issue(events));
        }
        Ok(issues)
    }
}

/// Issue payload as served by the issues endpoint.
#[derive(Debug, Deserialize)]
struct WireIssue {
    number: u64,
    title: String,
    #[serde(default)]
    labels: Vec<WireLabel>,
    closed_at: Option<DateTime<Utc>>,
    pull_request: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct WireLabel {
    name: String,
}

impl WireIssue {
    fn into_issue(self, events: Vec<RawEvent>) -> Issue {
        let mut issue = Issue::new(self.number, self.title).with_events(events);
        if let Some(label) = self.labels.into_iter().next() {
            issue = issue.with_label(label.name);
        }
        if let Some(closed_at) = self.closed_at {
            issue = issue.with_closed_date(closed_at.date_naive());
        }
        issue
    }
}
