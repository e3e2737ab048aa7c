//! Push-tags command - send tags missing from the remote to Lando

use crate::cli::confirm;
use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, bullet};
use anstream::println;
use lando_cli::config::Config;
use lando_cli::error::Result;
use lando_cli::lando::LandoClient;
use lando_cli::repo::{GitRepository, RepositoryQuery};
use lando_cli::submit::{Phase, ProgressCallback, execute_push, plan_tag_push, report_dry_run};
use std::path::Path;

/// Run the push-tags command
pub async fn run_push_tags(path: &Path, remote: &str, assume_yes: bool, dry_run: bool) -> Result<()> {
    let repo = GitRepository::open(path)?;

    let progress = CliProgress::new();
    progress.on_phase(Phase::Planning).await;
    let plan = plan_tag_push(&repo, remote)?;

    if plan.is_empty() {
        println!("No new tags - {} already has every local tag", remote.accent());
        return Ok(());
    }

    let n = plan.tags.len();
    println!("{} new tag{}:", n.emphasis(), if n == 1 { "" } else { "s" });
    for tag in &plan.tags {
        println!(
            "  {} {} {}",
            bullet(),
            tag.name.accent(),
            tag.target[..tag.target.len().min(12)].muted()
        );
    }
    println!();

    if dry_run {
        report_dry_run(&plan, &progress).await;
        return Ok(());
    }

    confirm(
        &format!("Submit {n} tag{} to Lando?", if n == 1 { "" } else { "s" }),
        assume_yes,
    )?;

    let client = LandoClient::new(Config::load()?);
    let push_url = repo.remote_url(remote)?;
    execute_push(&plan, &client, &push_url, &progress).await?;
    Ok(())
}
