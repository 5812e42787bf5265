//! Mock issue tracker for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use friend_links::error::{Error, Result};
use friend_links::tracker::IssueTracker;
use friend_links::types::{Issue, RepoConfig};
use std::collections::HashSet;
use std::sync::Mutex;

/// A recorded tracker call, in the order it was made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    /// `list_open_issues`
    List,
    /// `add_comment`
    Comment { issue_number: u64, body: String },
    /// `close_issue`
    Close { issue_number: u64 },
}

/// Simple in-memory tracker
///
/// Features:
/// - Configurable open issues
/// - Ordered call tracking for verification
/// - Error injection per operation and per issue
pub struct MockIssueTracker {
    config: RepoConfig,
    issues: Mutex<Vec<Issue>>,
    calls: Mutex<Vec<TrackerCall>>,
    // Error injection
    error_on_list: Mutex<Option<String>>,
    fail_comment_on: Mutex<HashSet<u64>>,
    fail_close_on: Mutex<HashSet<u64>>,
}

impl MockIssueTracker {
    /// Create a mock that lists the given issues
    pub fn with_issues(config: RepoConfig, issues: Vec<Issue>) -> Self {
        Self {
            config,
            issues: Mutex::new(issues),
            calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            fail_comment_on: Mutex::new(HashSet::new()),
            fail_close_on: Mutex::new(HashSet::new()),
        }
    }

    // === Error injection methods ===

    /// Make `list_open_issues` return an error
    pub fn fail_list(&self, msg: &str) {
        *self.error_on_list.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `add_comment` fail for one issue
    pub fn fail_comment(&self, issue_number: u64) {
        self.fail_comment_on.lock().unwrap().insert(issue_number);
    }

    /// Make `close_issue` fail for one issue
    pub fn fail_close(&self, issue_number: u64) {
        self.fail_close_on.lock().unwrap().insert(issue_number);
    }

    // === Call verification methods ===

    /// All calls, in order
    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Comments posted, as (issue number, body)
    pub fn comments(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                TrackerCall::Comment { issue_number, body } => Some((issue_number, body)),
                _ => None,
            })
            .collect()
    }

    /// Issues closed, in order
    pub fn closed(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                TrackerCall::Close { issue_number } => Some(issue_number),
                _ => None,
            })
            .collect()
    }

    /// Assert every issue was commented on and then closed, one at a time
    pub fn assert_sequential(&self, issue_numbers: &[u64]) {
        let calls = self.calls();
        let side_effects: Vec<&TrackerCall> =
            calls.iter().filter(|c| **c != TrackerCall::List).collect();

        assert_eq!(
            side_effects.len(),
            issue_numbers.len() * 2,
            "unexpected calls: {calls:?}"
        );
        for (pair, number) in side_effects.chunks(2).zip(issue_numbers) {
            assert!(
                matches!(pair[0], TrackerCall::Comment { issue_number, .. } if issue_number == number),
                "expected comment on #{number} but got: {calls:?}"
            );
            assert_eq!(
                pair[1],
                &TrackerCall::Close {
                    issue_number: *number
                },
                "expected close of #{number} but got: {calls:?}"
            );
        }
    }
}

#[async_trait]
impl IssueTracker for MockIssueTracker {
    async fn list_open_issues(&self) -> Result<Vec<Issue>> {
        self.calls.lock().unwrap().push(TrackerCall::List);

        if let Some(msg) = self.error_on_list.lock().unwrap().as_ref() {
            return Err(Error::Tracker(msg.clone()));
        }

        Ok(self.issues.lock().unwrap().clone())
    }

    async fn add_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        self.calls.lock().unwrap().push(TrackerCall::Comment {
            issue_number,
            body: body.to_string(),
        });

        if self.fail_comment_on.lock().unwrap().contains(&issue_number) {
            return Err(Error::Tracker(format!("comment on #{issue_number} failed")));
        }
        Ok(())
    }

    async fn close_issue(&self, issue_number: u64) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(TrackerCall::Close { issue_number });

        if self.fail_close_on.lock().unwrap().contains(&issue_number) {
            return Err(Error::Tracker(format!("close of #{issue_number} failed")));
        }

        self.issues
            .lock()
            .unwrap()
            .retain(|issue| issue.number != issue_number);
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
