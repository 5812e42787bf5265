//! Triage execution
//!
//! Runs the batch: list, decide, comment, close, then merge into the registry.

use crate::config::{FormTemplate, TriageConfig};
use crate::decide::{decide, Decision};
use crate::error::Result;
use crate::extract::extract_candidate;
use crate::registry::{merge_and_persist, LinkRegistry};
use crate::tracker::IssueTracker;
use crate::triage::{Phase, ProgressCallback};
use crate::types::{Issue, Submission};
use tracing::{debug, info};

/// Result of a triage run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageReport {
    /// Number of open issues found
    pub listed: usize,
    /// Issues whose submission was accepted, in processing order
    pub accepted: Vec<u64>,
    /// Issues whose submission was rejected, in processing order
    pub rejected: Vec<u64>,
    /// Entries appended to the registry
    pub written: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
}

/// Extract and validate one issue's submission form
///
/// An issue without a body is treated as an empty form.
pub fn process_issue(issue: &Issue, template: &FormTemplate) -> Decision {
    let body = issue.body.as_deref().unwrap_or_default();
    let candidate = extract_candidate(body, &template.labels);
    decide(issue, candidate, &template.notices)
}

/// Run one triage batch
///
/// Issues are handled strictly in listing order: each issue is commented on
/// and closed before the next one is looked at. Any tracker failure aborts
/// the run. Accepted links are written to the registry once, after every
/// issue has been handled, so a failure there does not reopen issues.
///
/// The registry is loaded and the target category resolved before any issue
/// is touched, so a missing or malformed registry fails the run up front.
pub async fn run_triage(
    config: &TriageConfig,
    tracker: &dyn IssueTracker,
    progress: &dyn ProgressCallback,
) -> Result<TriageReport> {
    let mut report = TriageReport {
        dry_run: config.dry_run,
        ..TriageReport::default()
    };

    progress.on_phase(Phase::CheckingRegistry).await;
    let registry = LinkRegistry::load(&config.registry_path)?;
    let existing = registry.entry_count(&config.category)?;
    debug!(
        "Category {} currently has {} entries",
        config.category, existing
    );

    progress.on_phase(Phase::FetchingIssues).await;
    let issues = tracker.list_open_issues().await?;
    report.listed = issues.len();
    progress.on_issues_listed(issues.len()).await;
    info!(
        "Found {} open issues in {}/{}",
        issues.len(),
        tracker.config().owner,
        tracker.config().repo
    );

    progress.on_phase(Phase::Processing).await;
    let mut accepted: Vec<Submission> = Vec::new();

    for issue in &issues {
        let decision = process_issue(issue, &config.template);
        progress.on_decision(issue, &decision).await;

        match &decision {
            Decision::Accepted { .. } => {
                info!("Issue #{} accepted", issue.number);
                report.accepted.push(issue.number);
            }
            Decision::Rejected { missing, .. } => {
                info!("Issue #{} rejected, missing {:?}", issue.number, missing);
                report.rejected.push(issue.number);
            }
        }

        if config.dry_run {
            continue;
        }

        tracker.add_comment(issue.number, decision.notice()).await?;
        tracker.close_issue(issue.number).await?;
        progress.on_issue_closed(issue).await;

        if let Decision::Accepted { submission, .. } = decision {
            accepted.push(submission);
        }
    }

    if config.dry_run {
        progress
            .on_message("Dry run - no comments, closes or registry writes")
            .await;
        progress.on_phase(Phase::Complete).await;
        return Ok(report);
    }

    progress.on_phase(Phase::Merging).await;
    report.written = merge_and_persist(&config.registry_path, &config.category, &accepted)?;

    progress.on_phase(Phase::Complete).await;
    Ok(report)
}
