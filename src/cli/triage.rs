//! Triage command - process open friend-link submissions

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use friend_links::config::TriageConfig;
use friend_links::error::Result;
use friend_links::tracker::create_tracker;
use friend_links::triage::run_triage;

/// Run the triage command
pub async fn run(config: &TriageConfig) -> Result<()> {
    let tracker = create_tracker(&config.repo).await?;
    let progress = CliProgress::default();

    let report = run_triage(config, tracker.as_ref(), &progress).await?;

    println!();
    if report.dry_run {
        println!(
            "Dry run complete: {} would be accepted, {} would be rejected",
            report.accepted.len().accent(),
            report.rejected.len().accent()
        );
    } else {
        println!(
            "Processed {} issue{}: {} accepted, {} rejected, {} added to {}",
            report.listed.accent(),
            if report.listed == 1 { "" } else { "s" },
            report.accepted.len().success(),
            report.rejected.len().warn(),
            report.written.accent(),
            config.registry_path.display().muted()
        );
    }

    Ok(())
}
