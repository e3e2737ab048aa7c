//! Commit enumeration

use crate::error::Result;
use crate::repo::RepositoryQuery;
use crate::types::Commit;
use tracing::debug;

/// Commits present on `local_ref` but absent from `remote_ref`, oldest first
///
/// Equal refs yield an empty list rather than an error.
pub fn enumerate_commits(
    repo: &dyn RepositoryQuery,
    local_ref: &str,
    remote_ref: &str,
) -> Result<Vec<Commit>> {
    let hashes = repo.commits_between(remote_ref, local_ref)?;
    debug!("{} new commits on {local_ref} over {remote_ref}", hashes.len());

    hashes
        .into_iter()
        .map(|hash| {
            Ok(Commit {
                parents: repo.parents(&hash)?,
                message: repo.commit_message(&hash)?,
                hash,
            })
        })
        .collect()
}
