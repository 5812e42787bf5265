//! Tracker service factory
//!
//! Creates the tracker for a repository configuration.

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::tracker::{GitHubTracker, IssueTracker};
use crate::types::RepoConfig;
use tracing::debug;

/// Create a tracker from configuration
///
/// Resolves the GitHub credential and builds an authenticated client.
pub async fn create_tracker(config: &RepoConfig) -> Result<Box<dyn IssueTracker>> {
    let auth = get_github_auth().await?;
    debug!("Using GitHub token from {:?}", auth.source);

    Ok(Box::new(GitHubTracker::new(
        &auth.token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?))
}
