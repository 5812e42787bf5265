//! Accept/reject decision for one submission

use crate::config::Notices;
use crate::types::{Candidate, Issue, Submission};

/// Outcome of validating one issue's form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// All required fields present; the link goes into the registry
    Accepted {
        /// The link to add
        submission: Submission,
        /// Comment to post on the issue
        notice: String,
    },
    /// At least one required field missing or empty
    Rejected {
        /// Names of the missing fields
        missing: Vec<&'static str>,
        /// Comment to post on the issue
        notice: String,
    },
}

impl Decision {
    /// Whether the submission was accepted
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Comment text for the issue
    pub fn notice(&self) -> &str {
        match self {
            Self::Accepted { notice, .. } | Self::Rejected { notice, .. } => notice,
        }
    }

    /// The accepted submission, if any
    pub const fn submission(&self) -> Option<&Submission> {
        match self {
            Self::Accepted { submission, .. } => Some(submission),
            Self::Rejected { .. } => None,
        }
    }
}

/// Present and not blank
fn filled(field: Option<&String>) -> Option<&str> {
    field.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Decide whether a candidate is complete enough to accept
///
/// `name`, `link`, `avatar` and `descr` must be present and non-empty.
/// `screenshot` is carried through but never checked.
pub fn decide(issue: &Issue, candidate: Candidate, notices: &Notices) -> Decision {
    let required = [
        ("name", filled(candidate.name.as_ref())),
        ("link", filled(candidate.link.as_ref())),
        ("avatar", filled(candidate.avatar.as_ref())),
        ("descr", filled(candidate.descr.as_ref())),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| *field)
        .collect();

    if !missing.is_empty() {
        return Decision::Rejected {
            missing,
            notice: notices.rejected.clone(),
        };
    }

    // Every required field is known to be present past this point
    Decision::Accepted {
        submission: Submission {
            name: candidate.name.unwrap_or_default(),
            link: candidate.link.unwrap_or_default(),
            avatar: candidate.avatar.unwrap_or_default(),
            descr: candidate.descr.unwrap_or_default(),
            screenshot: candidate.screenshot,
            issue_number: issue.number,
            created_at: issue.created_at,
            updated_at: issue.updated_at,
            state: issue.state.clone(),
        },
        notice: notices.accepted.clone(),
    }
}
