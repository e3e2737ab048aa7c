//! New tag detection

use crate::error::Result;
use crate::repo::RepositoryQuery;
use std::collections::BTreeSet;
use tracing::debug;

/// Tags that exist locally but not on `remote`
///
/// The remote is queried on every call, so a tag drops out as soon as it
/// has been pushed.
pub fn detect_new_tags(repo: &dyn RepositoryQuery, remote: &str) -> Result<BTreeSet<String>> {
    let local = repo.local_tags()?;
    let remote_tags = repo.remote_tags(remote)?;

    let new_tags: BTreeSet<String> = local.difference(&remote_tags).cloned().collect();
    debug!(
        "{} local tags, {} on {remote}, {} new",
        local.len(),
        remote_tags.len(),
        new_tags.len()
    );
    Ok(new_tags)
}
