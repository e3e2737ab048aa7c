//! lando - push local history to Lando
//!
//! CLI binary that turns unpushed commits and tags into a Lando landing job.

use anstream::eprintln;
use anyhow::Result;
use clap::{Parser, Subcommand};
use lando_cli::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::style::{Stylize, cross};

#[derive(Parser)]
#[command(name = "lando")]
#[command(about = "Push commits and tags through Lando")]
#[command(version)]
struct Cli {
    /// Path to git repository (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Log git invocations and Lando requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit new commits on a branch as a landing job
    PushCommits {
        /// Submit without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Dry run - show what would be submitted without contacting Lando
        #[arg(long)]
        dry_run: bool,

        /// Local branch to push (defaults to the current branch)
        #[arg(long)]
        local_branch: Option<String>,

        /// Remote-tracking branch to push onto (defaults to <remote>/<local branch>)
        #[arg(long)]
        remote_branch: Option<String>,

        /// Git remote Lando lands onto
        #[arg(long, default_value = "origin")]
        remote: String,
    },

    /// Submit tags missing from the remote
    PushTags {
        /// Submit without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// Dry run - show what would be submitted without contacting Lando
        #[arg(long)]
        dry_run: bool,

        /// Git remote to compare tags against
        #[arg(long, default_value = "origin")]
        remote: String,
    },

    /// Show the status of a landing job
    CheckJob {
        /// Job id printed by push-commits or push-tags
        id: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,lando_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::PushCommits {
            yes,
            dry_run,
            local_branch,
            remote_branch,
            remote,
        } => {
            cli::run_push_commits(
                &path,
                cli::PushCommitsOptions {
                    local_branch: local_branch.as_deref(),
                    remote_branch: remote_branch.as_deref(),
                    remote: &remote,
                    assume_yes: yes,
                    dry_run,
                },
            )
            .await?;
        }
        Commands::PushTags {
            yes,
            dry_run,
            remote,
        } => {
            cli::run_push_tags(&path, &remote, yes, dry_run).await?;
        }
        Commands::CheckJob { id } => {
            cli::run_check_job(id).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if matches!(e.downcast_ref::<Error>(), Some(Error::Cancelled)) => {
            eprintln!("{}", "Cancelled - nothing was submitted".warn());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", cross(), format!("{e:#}").error());
            ExitCode::FAILURE
        }
    }
}
