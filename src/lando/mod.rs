//! Lando landing service
//!
//! Receives the action list and new tags, and turns them into a landing job.

mod client;
mod wire;

pub use client::LandoClient;
pub use wire::{LandoAction, PushRequest};

use crate::error::Result;
use crate::types::{JobStatus, LandoJob, RepoInfo};
use async_trait::async_trait;

/// Operations against a Lando instance
///
/// Implementations own authentication and wire format; callers only hand
/// over ordered actions.
#[async_trait]
pub trait LandoApi: Send + Sync {
    /// Look up the repository Lando associates with a push URL
    async fn repo_info(&self, push_url: &str) -> Result<RepoInfo>;

    /// Submit actions, in order, as one landing job
    async fn submit(&self, repo: &RepoInfo, actions: &[LandoAction]) -> Result<LandoJob>;

    /// Fetch the status of a landing job
    async fn job_status(&self, job_id: u64) -> Result<JobStatus>;

    /// Base URL of the instance
    fn base_url(&self) -> &str;
}
