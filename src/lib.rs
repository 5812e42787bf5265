//! friend-links - triage blogroll submissions filed as GitHub issues
//!
//! Reads the `### Title` sections of each open issue, accepts the ones that
//! carry a name, URL, icon and description, replies and closes every issue,
//! and appends the accepted links to a YAML registry.

pub mod auth;
pub mod config;
pub mod decide;
pub mod error;
pub mod extract;
pub mod registry;
pub mod tracker;
pub mod triage;
pub mod types;
