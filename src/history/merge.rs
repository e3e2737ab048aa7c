//! Merge classification
//!
//! Only the newest commit decides the shape of the push. A merge commit at the
//! tip collapses everything it brought in (itself included) into a single
//! `MergeOnto`; merges buried deeper are replayed commit by commit like any
//! other commit.

use crate::error::Result;
use crate::history::enumerate_commits;
use crate::repo::RepositoryQuery;
use crate::types::{Action, Classification, Commit, FastForward, Target};
use std::collections::BTreeSet;
use tracing::debug;

/// Classify the history between `remote_ref` and `local_ref`
///
/// Returns `None` when the refs have not diverged.
pub fn classify_history(
    repo: &dyn RepositoryQuery,
    local_ref: &str,
    remote_ref: &str,
) -> Result<Option<Classification>> {
    let commits = enumerate_commits(repo, local_ref, remote_ref)?;
    classify_commits(repo, &commits, remote_ref)
}

/// Classify an already-enumerated list of new commits (oldest first)
pub fn classify_commits(
    repo: &dyn RepositoryQuery,
    commits: &[Commit],
    remote_ref: &str,
) -> Result<Option<Classification>> {
    let Some(tip) = commits.last() else {
        return Ok(None);
    };

    if let [mainline, merged, ..] = tip.parents.as_slice() {
        // Everything reachable from the merge but not from the mainline parent
        // is represented by the merge action.
        let superseded: BTreeSet<String> =
            repo.commits_between(mainline, &tip.hash)?.into_iter().collect();
        let target = target_for(repo, merged)?;

        debug!(
            "Tip {} merges {target} onto {mainline}; {} commits superseded",
            tip.short_hash(),
            superseded.len()
        );

        return Ok(Some(Classification::Merge {
            action: Action::MergeOnto {
                commit_message: tip.trimmed_message().to_string(),
                target,
            },
            superseded,
        }));
    }

    let fast_forward = detect_fast_forward(repo, commits, remote_ref)?;
    debug!(
        "Linear history of {} commits (fast-forward: {})",
        commits.len(),
        fast_forward.is_some()
    );
    Ok(Some(Classification::Linear { fast_forward }))
}

/// A fast-forward: single-parent commits all the way, the oldest sitting on the remote tip
fn detect_fast_forward(
    repo: &dyn RepositoryQuery,
    commits: &[Commit],
    remote_ref: &str,
) -> Result<Option<FastForward>> {
    let (Some(first), Some(tip)) = (commits.first(), commits.last()) else {
        return Ok(None);
    };
    if commits.iter().any(|c| c.parents.len() != 1) {
        return Ok(None);
    }

    let remote_tip = repo.resolve(remote_ref)?;
    if first.parents[0] != remote_tip {
        return Ok(None);
    }

    Ok(Some(FastForward {
        commit_message: tip.trimmed_message().to_string(),
        target: target_for(repo, &remote_tip)?,
    }))
}

/// Name a commit by a branch pointing at it if there is one, else by hash
fn target_for(repo: &dyn RepositoryQuery, hash: &str) -> Result<Target> {
    Ok(repo
        .branches_at(hash)?
        .into_iter()
        .next()
        .map_or_else(|| Target::Commit(hash.to_string()), Target::Branch))
}
