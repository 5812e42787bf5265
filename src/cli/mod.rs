//! CLI commands
//!
//! Command implementations for the `friend-links` binary.

mod progress;
pub mod style;
mod triage;

pub use triage::run as run_triage;
