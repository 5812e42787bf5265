//! friend-links - triage blogroll submissions
//!
//! CLI binary that processes open friend-link issues in one batch.

use anyhow::{Context, Result};
use clap::Parser;
use friend_links::config::{
    CategorySelector, FormTemplate, TriageConfig, DEFAULT_CATEGORY, DEFAULT_REGISTRY_PATH,
};
use friend_links::tracker::parse_repo_spec;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "friend-links")]
#[command(about = "Accept or reject friend-link submission issues and update the blogroll")]
#[command(version)]
struct Cli {
    /// Repository to triage: owner/repo or a GitHub URL
    /// (defaults to GITHUB_REPOSITORY)
    #[arg(long, env = "FRIEND_LINKS_REPO")]
    repo: Option<String>,

    /// Path to the YAML link registry
    #[arg(long, env = "FRIEND_LINKS_REGISTRY", default_value = DEFAULT_REGISTRY_PATH)]
    registry: PathBuf,

    /// Category receiving new links: its title, or index:N
    #[arg(long, env = "FRIEND_LINKS_CATEGORY", default_value = DEFAULT_CATEGORY)]
    category: CategorySelector,

    /// Issue form language: en or zh
    #[arg(long, env = "FRIEND_LINKS_FORM", default_value = "en")]
    form: FormTemplate,

    /// Dry run - decide only, without commenting, closing or writing
    #[arg(long)]
    dry_run: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let repo_spec = cli
        .repo
        .or_else(|| env::var("GITHUB_REPOSITORY").ok())
        .context("no repository given; pass --repo or set FRIEND_LINKS_REPO")?;

    let config = TriageConfig {
        repo: parse_repo_spec(&repo_spec)?,
        registry_path: cli.registry,
        category: cli.category,
        template: cli.form,
        dry_run: cli.dry_run,
    };

    cli::run_triage(&config).await?;

    Ok(())
}
