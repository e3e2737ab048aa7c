//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, etc.) to receive
//! progress updates during a push.

use crate::error::Error;
use crate::types::{LandoJob, RepoInfo};
use async_trait::async_trait;
use std::fmt;

/// Push phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Working out actions from local history
    Planning,
    /// Asking Lando which repository the remote is
    LookingUpRepo,
    /// Sending actions to Lando
    Submitting,
    /// Push complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Planning => "Planning",
            Self::LookingUpRepo => "Looking up repository",
            Self::Submitting => "Submitting to Lando",
            Self::Complete => "Done",
        })
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a push.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once Lando has identified the repository
    async fn on_repo_resolved(&self, repo: &RepoInfo);

    /// Called when Lando accepts the landing job
    async fn on_job_submitted(&self, job: &LandoJob);

    /// Called when a step fails, before the error is returned
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_repo_resolved(&self, _repo: &RepoInfo) {}
    async fn on_job_submitted(&self, _job: &LandoJob) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
