//! Batch triage of friend-link submission issues
//!
//! One run lists the open issues, decides each one in order (commenting on
//! and closing it before moving on), then writes every accepted link to the
//! registry in a single pass.

mod execute;
mod progress;

pub use execute::{process_issue, run_triage, TriageReport};
pub use progress::{NoopProgress, Phase, ProgressCallback};
