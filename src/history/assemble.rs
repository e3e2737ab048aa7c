//! Action assembly

use crate::error::Result;
use crate::history::{classify_commits, enumerate_commits, extract_patches};
use crate::repo::RepositoryQuery;
use crate::types::{Action, Classification, Commit};
use tracing::debug;

/// Ordered actions replaying `local_ref` on top of `remote_ref`
///
/// Tags are not included. Any repository failure aborts the whole assembly.
pub fn assemble_actions(
    repo: &dyn RepositoryQuery,
    local_ref: &str,
    remote_ref: &str,
) -> Result<Vec<Action>> {
    let commits = enumerate_commits(repo, local_ref, remote_ref)?;
    match classify_commits(repo, &commits, remote_ref)? {
        Some(classification) => assemble_classified(repo, &commits, &classification),
        None => Ok(Vec::new()),
    }
}

/// Actions for enumerated commits whose shape is already known
///
/// Commits not covered by a tip merge become one `AddCommit` each, oldest
/// first; a tip merge contributes a single trailing `MergeOnto`.
pub fn assemble_classified(
    repo: &dyn RepositoryQuery,
    commits: &[Commit],
    classification: &Classification,
) -> Result<Vec<Action>> {
    let (merge, remaining): (Option<&Action>, Vec<Commit>) = match classification {
        Classification::Merge { action, superseded } => (
            Some(action),
            commits
                .iter()
                .filter(|c| !superseded.contains(&c.hash))
                .cloned()
                .collect(),
        ),
        Classification::Linear { .. } => (None, commits.to_vec()),
    };

    let patches = extract_patches(repo, &remaining)?;
    let mut actions: Vec<Action> = patches.iter().map(|p| Action::add_commit(p)).collect();
    actions.extend(merge.cloned());

    debug!(
        "Assembled {} actions from {} new commits",
        actions.len(),
        commits.len()
    );
    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::fake::FakeRepository;
    use crate::types::Target;

    fn decoded(action: &Action) -> String {
        String::from_utf8(action.decoded_patch().expect("AddCommit")).unwrap()
    }

    #[test]
    fn test_assemble_equal_refs_is_empty() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .branch("main", "a")
            .reference("origin/main", "a");

        assert!(assemble_actions(&repo, "main", "origin/main").unwrap().is_empty());
    }

    #[test]
    fn test_assemble_linear_one_per_commit() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("b", &["a"], "First")
            .commit("c", &["b"], "Second")
            .branch("main", "c")
            .reference("origin/main", "a");

        let actions = assemble_actions(&repo, "main", "origin/main").unwrap();
        assert_eq!(actions.len(), 2);
        assert!(decoded(&actions[0]).starts_with("First"));
        assert!(decoded(&actions[1]).starts_with("Second"));
    }

    #[test]
    fn test_assemble_tip_merge_collapses_side() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("local", &["a"], "Local work")
            .commit("side1", &["a"], "Side one")
            .commit("side2", &["side1"], "Side two")
            .commit("merge", &["local", "side2"], "Merge feature")
            .branch("feature", "side2")
            .branch("main", "merge")
            .reference("origin/main", "a");

        let actions = assemble_actions(&repo, "main", "origin/main").unwrap();
        assert_eq!(actions.len(), 2);
        assert!(decoded(&actions[0]).starts_with("Local work"));
        assert_eq!(
            actions[1],
            Action::MergeOnto {
                commit_message: "Merge feature".to_string(),
                target: Target::Branch("feature".to_string()),
            }
        );
    }

    #[test]
    fn test_assemble_buried_merge_stays_individual() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("side", &["a"], "Side")
            .commit("merge", &["a", "side"], "Merge side")
            .commit("after", &["merge"], "After")
            .branch("main", "after")
            .reference("origin/main", "a");

        let actions = assemble_actions(&repo, "main", "origin/main").unwrap();
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().all(|a| matches!(a, Action::AddCommit { .. })));
        assert!(decoded(&actions[1]).starts_with("Merge side"));
    }

    #[test]
    fn test_assemble_propagates_patch_failure() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("b", &["a"], "Broken")
            .branch("main", "b")
            .reference("origin/main", "a")
            .break_patch("b");

        assert!(assemble_actions(&repo, "main", "origin/main").is_err());
    }
}
