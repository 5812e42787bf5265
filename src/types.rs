//! Core types for friend-links

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An open issue fetched from the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Markdown body (None when the submitter left it empty)
    pub body: Option<String>,
    /// Web URL for the issue
    pub html_url: String,
    /// When the issue was opened
    pub created_at: DateTime<Utc>,
    /// When the issue was last updated
    pub updated_at: DateTime<Utc>,
    /// Issue state as reported by the tracker ("open", "closed")
    pub state: String,
}

/// Fields extracted from one issue body, before validation
///
/// A `None` field means the heading was not present at all, which is
/// distinct from a heading with empty content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// Blog display name
    pub name: Option<String>,
    /// Blog URL
    pub link: Option<String>,
    /// Blog icon URL
    pub avatar: Option<String>,
    /// Blog description
    pub descr: Option<String>,
    /// Homepage screenshot URL
    pub screenshot: Option<String>,
}

/// An accepted friend link, as written to the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Blog display name
    pub name: String,
    /// Blog URL
    pub link: String,
    /// Blog icon URL
    pub avatar: String,
    /// Blog description
    pub descr: String,
    /// Homepage screenshot URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    /// Number of the issue this link came from
    pub issue_number: u64,
    /// Issue creation time
    pub created_at: DateTime<Utc>,
    /// Issue last-update time
    pub updated_at: DateTime<Utc>,
    /// Issue state at the time of processing
    pub state: String,
}

/// Repository coordinates for the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}
