//! GitHub issue tracker implementation

use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use crate::types::{Issue, RepoConfig};
use async_trait::async_trait;
use octocrab::models::{self, IssueState};
use octocrab::{params, Octocrab};
use tracing::debug;

/// Largest page size the GitHub REST API accepts
const PER_PAGE: u8 = 100;

fn state_name(state: &IssueState) -> &'static str {
    match state {
        IssueState::Open => "open",
        IssueState::Closed => "closed",
        _ => "unknown",
    }
}

impl From<models::issues::Issue> for Issue {
    fn from(issue: models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            state: state_name(&issue.state).to_string(),
            body: issue.body,
            html_url: issue.html_url.to_string(),
            created_at: issue.created_at,
            updated_at: issue.updated_at,
        }
    }
}

/// GitHub tracker using octocrab
pub struct GitHubTracker {
    client: Octocrab,
    config: RepoConfig,
}

impl GitHubTracker {
    /// Create a tracker for github.com or a GitHub Enterprise host
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let base_url = host.as_ref().map(|h| format!("https://{h}/api/v3"));
        Self::build(token, base_url.as_deref(), RepoConfig { owner, repo, host })
    }

    /// Create a tracker against an explicit API base URL
    pub fn with_base_uri(token: &str, base_uri: &str, owner: String, repo: String) -> Result<Self> {
        Self::build(
            token,
            Some(base_uri),
            RepoConfig {
                owner,
                repo,
                host: None,
            },
        )
    }

    fn build(token: &str, base_uri: Option<&str>, config: RepoConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::Tracker(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::Tracker(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_open_issues(&self) -> Result<Vec<Issue>> {
        let first = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::Open)
            .per_page(PER_PAGE)
            .send()
            .await?;
        let all = self.client.all_pages(first).await?;

        let total = all.len();
        let issues: Vec<Issue> = all
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(Issue::from)
            .collect();

        debug!(
            "Listed {} open issues ({} pull requests skipped)",
            issues.len(),
            total - issues.len()
        );

        Ok(issues)
    }

    async fn add_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        let comment = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(issue_number, body)
            .await?;

        debug!("Created comment {} on issue #{issue_number}", comment.id);
        Ok(())
    }

    async fn close_issue(&self, issue_number: u64) -> Result<()> {
        let issue = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .update(issue_number)
            .state(IssueState::Closed)
            .send()
            .await?;

        debug!(
            "Issue #{} is now {}",
            issue.number,
            state_name(&issue.state)
        );
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
