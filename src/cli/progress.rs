//! CLI progress callback with styled output and a fetch spinner

use crate::cli::style::{check, cross, hyperlink, spinner_style, Stream, Stylize};
use anstream::println;
use async_trait::async_trait;
use friend_links::decide::Decision;
use friend_links::triage::{Phase, ProgressCallback};
use friend_links::types::Issue;
use indicatif::ProgressBar;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback that prints per-issue outcomes to stdout
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    fn finish_spinner(&self) {
        let spinner = self.spinner.lock().ok().and_then(|mut guard| guard.take());
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::FetchingIssues => {
                let spinner = ProgressBar::new_spinner();
                spinner.set_style(spinner_style());
                spinner.set_message(phase.to_string());
                spinner.enable_steady_tick(Duration::from_millis(80));
                if let Ok(mut guard) = self.spinner.lock() {
                    *guard = Some(spinner);
                }
            }
            Phase::CheckingRegistry => {}
            Phase::Processing | Phase::Merging | Phase::Complete => {
                self.finish_spinner();
                println!("{}", phase.to_string().emphasis());
            }
        }
    }

    async fn on_issues_listed(&self, count: usize) {
        self.finish_spinner();
        println!(
            "Found {} open submission{}",
            count.accent(),
            if count == 1 { "" } else { "s" }
        );
    }

    async fn on_decision(&self, issue: &Issue, decision: &Decision) {
        let number = format!("#{}", issue.number);
        let link = hyperlink(Stream::Stdout, &number, &issue.html_url);

        match decision {
            Decision::Accepted { submission, .. } => {
                println!(
                    "  {} {} accepted: {} {}",
                    check(),
                    link.accent(),
                    submission.name.emphasis(),
                    submission.link.muted()
                );
            }
            Decision::Rejected { missing, .. } => {
                println!(
                    "  {} {} rejected: missing {}",
                    cross(),
                    link.accent(),
                    missing.join(", ").warn()
                );
            }
        }
    }

    async fn on_issue_closed(&self, issue: &Issue) {
        println!("    {}", format!("commented on and closed #{}", issue.number).muted());
    }

    async fn on_message(&self, message: &str) {
        println!("{}", message.warn());
    }
}
