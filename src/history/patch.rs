//! Patch extraction

use crate::error::Result;
use crate::repo::RepositoryQuery;
use crate::types::Commit;

/// One patch document per commit, index-aligned with `commits`
///
/// Any commit without a patch fails the whole extraction; there is no
/// partial output.
pub fn extract_patches(repo: &dyn RepositoryQuery, commits: &[Commit]) -> Result<Vec<String>> {
    commits.iter().map(|c| repo.patch_text(&c.hash)).collect()
}
