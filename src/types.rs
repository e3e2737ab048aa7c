//! Core types for lando-cli

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// A commit read from the local repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash (hex)
    pub hash: String,
    /// Parent hashes; index 0 is the mainline parent
    pub parents: Vec<String>,
    /// Full commit message
    pub message: String,
}

impl Commit {
    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Message without its trailing line endings, as sent in `MergeOnto`
    pub fn trimmed_message(&self) -> &str {
        self.message.trim_end_matches(['\r', '\n'])
    }

    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        &self.hash[..self.hash.len().min(12)]
    }

    /// True when the commit records two or more parents
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// True for a commit with no parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// What a merge or fast-forward points at
///
/// A branch name when one points at the commit; a raw hash otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A local branch name
    Branch(String),
    /// A commit hash
    Commit(String),
}

impl Target {
    /// The identifier sent to Lando
    pub fn as_str(&self) -> &str {
        match self {
            Self::Branch(name) => name,
            Self::Commit(hash) => hash,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of remote replay, in the order Lando must apply it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Apply a single non-merge commit
    AddCommit {
        /// Standard base64 of the patch document, unwrapped
        base64_patch: String,
    },
    /// Merge `target` onto the current line of history
    MergeOnto {
        /// Message of the merge commit
        commit_message: String,
        /// Tip of the merged-in side
        target: Target,
    },
}

impl Action {
    /// Build an `AddCommit` from a raw patch document
    pub fn add_commit(patch: &str) -> Self {
        Self::AddCommit {
            base64_patch: BASE64.encode(patch.as_bytes()),
        }
    }

    /// Decode the patch of an `AddCommit`; `None` for other variants
    pub fn decoded_patch(&self) -> Option<Vec<u8>> {
        match self {
            Self::AddCommit { base64_patch } => BASE64.decode(base64_patch).ok(),
            Self::MergeOnto { .. } => None,
        }
    }
}

/// Informational record of a fast-forward: the remote tip simply advances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastForward {
    /// Message of the newest commit
    pub commit_message: String,
    /// The remote tip before the advance
    pub target: Target,
}

/// Shape of the history between the remote ref and the local ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Every new commit is replayed on its own
    Linear {
        /// Set when the new commits sit directly on the remote tip with no merges
        fast_forward: Option<FastForward>,
    },
    /// The newest commit is a true merge
    Merge {
        /// The single `MergeOnto` replacing the merged-in commits
        action: Action,
        /// Commits represented by `action` (merge commit included)
        superseded: BTreeSet<String>,
    },
}

/// A tag that exists locally but not on the remote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    /// Tag name
    pub name: String,
    /// Commit the tag points at
    pub target: String,
}

/// How Lando identifies the repository behind a push URL
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoInfo {
    /// Repository name on Lando
    pub repo_name: String,
    /// Branch Lando lands onto
    pub branch_name: String,
}

/// A landing job accepted by Lando
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LandoJob {
    /// Job identifier
    pub job_id: u64,
    /// URL to poll for status
    pub status_url: String,
    /// Free-form message from Lando
    #[serde(default)]
    pub message: Option<String>,
}

/// Status of a landing job
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobStatus {
    /// Job identifier
    pub id: u64,
    /// Status keyword (SUBMITTED, IN_PROGRESS, LANDED, FAILED, ...)
    pub status: String,
    /// Error text for failed jobs
    #[serde(default)]
    pub error: Option<String>,
    /// When the job was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
