//! Phase 3: Push execution
//!
//! Sends a push plan to Lando as a single landing job.

use crate::error::Result;
use crate::lando::LandoApi;
use crate::submit::{Phase, ProgressCallback, PushPlan};
use crate::types::{Action, LandoJob, RepoInfo};
use tracing::info;

/// Result of push execution
#[derive(Debug, Clone, Default)]
pub struct PushResult {
    /// Repository Lando resolved the push URL to
    pub repo: Option<RepoInfo>,
    /// The accepted landing job
    pub job: Option<LandoJob>,
    /// Number of actions sent
    pub submitted_actions: usize,
}

/// Execute a push plan
///
/// This performs the actual operations:
/// 1. Look up the repository behind `push_url`
/// 2. Submit commit actions followed by tags
///
/// Any failure is reported to `progress` and returned unchanged; nothing is
/// retried.
pub async fn execute_push(
    plan: &PushPlan,
    api: &dyn LandoApi,
    push_url: &str,
    progress: &dyn ProgressCallback,
) -> Result<PushResult> {
    let mut result = PushResult::default();

    if plan.is_empty() {
        progress.on_message("Nothing to push - already in sync").await;
        return Ok(result);
    }

    progress.on_phase(Phase::LookingUpRepo).await;
    let repo = match api.repo_info(push_url).await {
        Ok(repo) => repo,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };
    progress.on_repo_resolved(&repo).await;

    progress.on_phase(Phase::Submitting).await;
    let actions = plan.lando_actions();
    let job = match api.submit(&repo, &actions).await {
        Ok(job) => job,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };
    info!(
        "Lando accepted job {} for {}/{}",
        job.job_id, repo.repo_name, repo.branch_name
    );
    progress.on_job_submitted(&job).await;
    progress.on_phase(Phase::Complete).await;

    result.submitted_actions = actions.len();
    result.repo = Some(repo);
    result.job = Some(job);
    Ok(result)
}

/// Report what would be sent, without touching Lando
pub async fn report_dry_run(plan: &PushPlan, progress: &dyn ProgressCallback) {
    if plan.is_empty() {
        progress.on_message("Nothing to push - already in sync").await;
        return;
    }

    progress.on_message("Dry run - nothing will be submitted").await;
    if !plan.actions.is_empty() {
        progress.on_message("Would submit:").await;
        for action in &plan.actions {
            let line = match action {
                Action::AddCommit { base64_patch } => {
                    format!("  - add commit ({} bytes encoded)", base64_patch.len())
                }
                Action::MergeOnto {
                    commit_message,
                    target,
                } => format!(
                    "  - merge {target} onto {} ({})",
                    plan.local_ref,
                    commit_message.lines().next().unwrap_or_default()
                ),
            };
            progress.on_message(&line).await;
        }
    }

    if !plan.tags.is_empty() {
        progress.on_message("Would tag:").await;
        for tag in &plan.tags {
            progress
                .on_message(&format!("  - {} at {}", tag.name, tag.target))
                .await;
        }
    }
}
