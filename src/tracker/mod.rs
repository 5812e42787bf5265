//! Issue tracker services
//!
//! The triage pipeline only talks to the tracker through [`IssueTracker`], so
//! tests can substitute an in-memory implementation.

mod detection;
mod factory;
mod github;

pub use detection::parse_repo_spec;
pub use factory::create_tracker;
pub use github::GitHubTracker;

use crate::error::Result;
use crate::types::{Issue, RepoConfig};
use async_trait::async_trait;

/// Issue tracker operations used by the triage pipeline
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List every open issue (not pull requests), oldest page first
    async fn list_open_issues(&self) -> Result<Vec<Issue>>;

    /// Post a comment on an issue
    async fn add_comment(&self, issue_number: u64, body: &str) -> Result<()>;

    /// Close an issue
    async fn close_issue(&self, issue_number: u64) -> Result<()>;

    /// Get the repository configuration
    fn config(&self) -> &RepoConfig;
}
