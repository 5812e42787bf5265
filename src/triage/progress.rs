//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, CI log annotations, etc.) to
//! receive progress updates during a triage run.

use crate::decide::Decision;
use crate::types::Issue;
use async_trait::async_trait;
use std::fmt;

/// Triage phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking the registry can be updated
    CheckingRegistry,
    /// Listing open issues
    FetchingIssues,
    /// Deciding, commenting on and closing issues
    Processing,
    /// Writing accepted links to the registry
    Merging,
    /// Run complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CheckingRegistry => "Checking registry",
            Self::FetchingIssues => "Fetching open issues",
            Self::Processing => "Processing submissions",
            Self::Merging => "Updating registry",
            Self::Complete => "Done",
        };
        f.write_str(label)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during triage.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the open issues have been listed
    async fn on_issues_listed(&self, count: usize);

    /// Called after an issue's form has been validated
    async fn on_decision(&self, issue: &Issue, decision: &Decision);

    /// Called after an issue has been commented on and closed
    async fn on_issue_closed(&self, issue: &Issue);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_issues_listed(&self, _count: usize) {}
    async fn on_decision(&self, _issue: &Issue, _decision: &Decision) {}
    async fn on_issue_closed(&self, _issue: &Issue) {}
    async fn on_message(&self, _message: &str) {}
}
