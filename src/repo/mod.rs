//! Read-only access to the local repository
//!
//! Everything the history analysis needs to know about commits, refs and tags
//! goes through [`RepositoryQuery`], so ancestry questions have one answer.

mod git;

#[cfg(test)]
pub(crate) mod fake;

pub use git::GitRepository;

use crate::error::Result;
use std::collections::BTreeSet;

/// Narrow query interface over a version-controlled working copy
///
/// All operations are read-only. Missing refs fail with
/// [`Error::RefNotFound`](crate::error::Error::RefNotFound); anything else the
/// tool rejects fails with [`Error::Repository`](crate::error::Error::Repository).
pub trait RepositoryQuery {
    /// Name of the branch HEAD points to
    ///
    /// Fails with [`Error::DetachedHead`](crate::error::Error::DetachedHead)
    /// when HEAD is not symbolic.
    fn current_branch(&self) -> Result<String>;

    /// Peel a ref, tag or hash to a commit hash
    fn resolve(&self, rev: &str) -> Result<String>;

    /// Commits reachable from `head` but not from `base`, oldest first
    ///
    /// Ancestors always precede their descendants.
    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>>;

    /// Full message of a commit
    fn commit_message(&self, hash: &str) -> Result<String>;

    /// Parents of a commit; index 0 is the mainline parent
    fn parents(&self, hash: &str) -> Result<Vec<String>>;

    /// Commit message followed by a unified diff against the mainline parent
    fn patch_text(&self, hash: &str) -> Result<String>;

    /// Local branches pointing exactly at `hash`, sorted by name
    fn branches_at(&self, hash: &str) -> Result<Vec<String>>;

    /// Tags in the local repository
    fn local_tags(&self) -> Result<BTreeSet<String>>;

    /// Tags currently present on `remote`
    fn remote_tags(&self, remote: &str) -> Result<BTreeSet<String>>;

    /// Commit a tag points at
    fn tag_target(&self, name: &str) -> Result<String>;

    /// Push URL of a remote
    fn remote_url(&self, remote: &str) -> Result<String>;
}
