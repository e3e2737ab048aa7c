//! Shared CLI progress callback with styled output and a spinner

use crate::cli::style::{Stream, Stylize, check, cross, hyperlink_url, spinner_style};
use anstream::{eprintln, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use lando_cli::error::Error;
use lando_cli::submit::{Phase, ProgressCallback};
use lando_cli::types::{LandoJob, RepoInfo};
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress callback
///
/// Network phases run under a spinner; everything else prints a line.
#[derive(Default)]
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgress {
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn start_spinner(&self, message: String) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(spinner_style());
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(80));
        if let Some(old) = self.replace_spinner(Some(bar)) {
            old.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        if let Some(bar) = self.replace_spinner(None) {
            bar.finish_and_clear();
        }
    }

    fn replace_spinner(&self, bar: Option<ProgressBar>) -> Option<ProgressBar> {
        match self.spinner.lock() {
            Ok(mut slot) => std::mem::replace(&mut *slot, bar),
            Err(poisoned) => std::mem::replace(&mut *poisoned.into_inner(), bar),
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::LookingUpRepo | Phase::Submitting => {
                self.start_spinner(format!("{phase}..."));
            }
            Phase::Planning => println!("{}...", phase.to_string().emphasis()),
            Phase::Complete => self.stop_spinner(),
        }
    }

    async fn on_repo_resolved(&self, repo: &RepoInfo) {
        self.stop_spinner();
        println!(
            "  {} Lando repository {} (branch {})",
            check(),
            repo.repo_name.accent(),
            repo.branch_name.accent()
        );
    }

    async fn on_job_submitted(&self, job: &LandoJob) {
        self.stop_spinner();
        let id = format!("#{}", job.job_id);
        println!("  {} Submitted landing job {}", check(), id.accent());
        if let Some(message) = &job.message {
            println!("    {}", message.muted());
        }
        println!("    {}", hyperlink_url(Stream::Stdout, &job.status_url));
    }

    async fn on_error(&self, err: &Error) {
        self.stop_spinner();
        let what = match err {
            Error::LandoApi { status, .. } => format!("Lando rejected the request ({status})"),
            Error::Http(_) => "could not reach Lando".to_string(),
            _ => "push failed".to_string(),
        };
        eprintln!("  {} {}", cross(), what.error());
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
