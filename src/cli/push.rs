//! Push-commits command - send new local commits to Lando

use crate::cli::confirm;
use crate::cli::progress::CliProgress;
use crate::cli::style::{Stylize, arrow, bullet, check};
use anstream::println;
use lando_cli::config::Config;
use lando_cli::error::Result;
use lando_cli::lando::LandoClient;
use lando_cli::repo::{GitRepository, RepositoryQuery};
use lando_cli::submit::{
    Phase, ProgressCallback, PushPlan, execute_push, plan_commit_push, report_dry_run,
};
use lando_cli::types::{Action, Classification};
use std::path::Path;

/// Options for `push-commits`
pub struct PushCommitsOptions<'a> {
    pub local_branch: Option<&'a str>,
    pub remote_branch: Option<&'a str>,
    pub remote: &'a str,
    pub assume_yes: bool,
    pub dry_run: bool,
}

/// Run the push-commits command
pub async fn run_push_commits(path: &Path, opts: PushCommitsOptions<'_>) -> Result<()> {
    let repo = GitRepository::open(path)?;

    let local_ref = match opts.local_branch {
        Some(branch) => branch.to_string(),
        None => repo.current_branch()?,
    };
    let remote_ref = opts
        .remote_branch
        .map_or_else(|| format!("{}/{local_ref}", opts.remote), ToString::to_string);

    println!(
        "Using local branch {} and {} as the base commit.",
        local_ref.accent(),
        remote_ref.accent()
    );

    let progress = CliProgress::new();
    progress.on_phase(Phase::Planning).await;
    let plan = plan_commit_push(&repo, &local_ref, &remote_ref)?;

    if plan.is_empty() {
        println!("Nothing to push - {local_ref} is up to date with {remote_ref}");
        return Ok(());
    }

    print_commits(&plan);

    if opts.dry_run {
        report_dry_run(&plan, &progress).await;
        return Ok(());
    }

    let count = plan.actions.len();
    confirm(
        &format!(
            "Submit {count} action{} to Lando?",
            if count == 1 { "" } else { "s" }
        ),
        opts.assume_yes,
    )?;

    let client = LandoClient::new(Config::load()?);
    let push_url = repo.remote_url(opts.remote)?;
    let result = execute_push(&plan, &client, &push_url, &progress).await?;

    if let Some(job) = result.job {
        println!();
        println!(
            "{} Landing job {} queued with {} action{}",
            check(),
            format!("#{}", job.job_id).accent(),
            result.submitted_actions,
            if result.submitted_actions == 1 { "" } else { "s" }
        );
    }
    Ok(())
}

/// List the new commits and how the history will be replayed
fn print_commits(plan: &PushPlan) {
    let n = plan.commits.len();
    println!(
        "{} new commit{}:",
        n.emphasis(),
        if n == 1 { "" } else { "s" }
    );
    for commit in &plan.commits {
        println!(
            "  {} {} {}",
            bullet(),
            commit.short_hash().accent(),
            commit.summary()
        );
    }

    match &plan.classification {
        Some(Classification::Merge {
            action: Action::MergeOnto { target, .. },
            superseded,
        }) => {
            println!(
                "  {} merge {} onto {} ({} commit{} replaced by one merge)",
                arrow(),
                target.accent(),
                plan.local_ref.accent(),
                superseded.len(),
                if superseded.len() == 1 { "" } else { "s" }
            );
        }
        _ => {
            if let Some(ff) = plan.fast_forward() {
                let from = ff.target.as_str();
                println!(
                    "  {}",
                    format!(
                        "fast-forward of {} from {}",
                        plan.remote_ref,
                        &from[..from.len().min(12)]
                    )
                    .muted()
                );
            }
        }
    }
    println!();
}
