//! Repository detection from `owner/repo` specs and remote URLs

use crate::error::{Error, Result};
use crate::types::RepoConfig;
use regex::Regex;
use std::env;
use std::sync::LazyLock;

// SSH format: git@host:owner/repo.git
static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@[^:]+:(.+?)(?:\.git)?/?$").expect("hardcoded ssh pattern is valid")
});

// HTTPS format: https://host/owner/repo.git
static RE_HTTPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$").expect("hardcoded https pattern is valid")
});

/// Whether a hostname belongs to GitHub (github.com or the `GH_HOST` instance)
fn is_github_host(hostname: &str) -> bool {
    let gh_host = env::var("GH_HOST").ok();

    hostname == "github.com"
        || hostname.ends_with(".github.com")
        || gh_host.as_ref().is_some_and(|h| hostname == *h)
}

/// Parse the repository to triage
///
/// Accepts the `owner/repo` shorthand (as found in `GITHUB_REPOSITORY`), an
/// HTTPS URL, or an SSH remote. URLs must point at github.com or at the host
/// named by `GH_HOST`.
pub fn parse_repo_spec(spec: &str) -> Result<RepoConfig> {
    let spec = spec.trim();

    let (path, hostname) = if spec.starts_with("git@") || spec.contains("://") {
        let hostname = extract_hostname(spec)
            .ok_or_else(|| Error::Config(format!("cannot parse repository URL: {spec}")))?;

        if !is_github_host(&hostname) {
            return Err(Error::Config(format!(
                "{hostname} is not a GitHub host (set GH_HOST for GitHub Enterprise)"
            )));
        }

        let path = RE_SSH
            .captures(spec)
            .or_else(|| RE_HTTPS.captures(spec))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| Error::Config(format!("cannot parse repository URL: {spec}")))?;

        (path, Some(hostname))
    } else {
        (spec, None)
    };

    let parts: Vec<&str> = path.split('/').collect();
    let [owner, repo] = parts.as_slice() else {
        return Err(Error::Config(format!(
            "invalid repository '{path}' (expected owner/repo)"
        )));
    };

    if owner.is_empty() || repo.is_empty() {
        return Err(Error::Config(format!(
            "invalid repository '{path}' (expected owner/repo)"
        )));
    }

    Ok(RepoConfig {
        owner: (*owner).to_string(),
        repo: (*repo).to_string(),
        host: hostname.filter(|h| h != "github.com"),
    })
}

fn extract_hostname(url: &str) -> Option<String> {
    // SSH format
    if url.starts_with("git@") {
        return url
            .strip_prefix("git@")
            .and_then(|s| s.split(':').next())
            .map(ToString::to_string);
    }

    // HTTPS format
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
