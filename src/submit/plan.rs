//! Phase 1: Push planning
//!
//! Determines which actions and tags a push will send.

use crate::error::Result;
use crate::history::{assemble_classified, classify_commits, detect_new_tags, enumerate_commits};
use crate::lando::LandoAction;
use crate::repo::RepositoryQuery;
use crate::types::{Action, Classification, Commit, FastForward, NewTag};

/// Push plan
#[derive(Debug, Clone, Default)]
pub struct PushPlan {
    /// Local ref being pushed
    pub local_ref: String,
    /// Remote ref used as the base
    pub remote_ref: String,
    /// New commits, oldest first
    pub commits: Vec<Commit>,
    /// Shape of the new history, if any
    pub classification: Option<Classification>,
    /// Commit and merge actions in replay order
    pub actions: Vec<Action>,
    /// New tags, sorted by name
    pub tags: Vec<NewTag>,
}

impl PushPlan {
    /// Nothing to send
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.tags.is_empty()
    }

    /// The fast-forward record, when the push is a plain fast-forward
    pub fn fast_forward(&self) -> Option<&FastForward> {
        match &self.classification {
            Some(Classification::Linear { fast_forward }) => fast_forward.as_ref(),
            _ => None,
        }
    }

    /// Commit actions followed by tags, as sent to Lando
    pub fn lando_actions(&self) -> Vec<LandoAction> {
        self.actions
            .iter()
            .map(LandoAction::from)
            .chain(self.tags.iter().map(LandoAction::from))
            .collect()
    }
}

/// Plan a push of `local_ref` on top of `remote_ref`
///
/// An empty plan means the refs have not diverged.
pub fn plan_commit_push(
    repo: &dyn RepositoryQuery,
    local_ref: &str,
    remote_ref: &str,
) -> Result<PushPlan> {
    let commits = enumerate_commits(repo, local_ref, remote_ref)?;
    let classification = classify_commits(repo, &commits, remote_ref)?;
    let actions = match &classification {
        Some(c) => assemble_classified(repo, &commits, c)?,
        None => Vec::new(),
    };

    Ok(PushPlan {
        local_ref: local_ref.to_string(),
        remote_ref: remote_ref.to_string(),
        commits,
        classification,
        actions,
        tags: Vec::new(),
    })
}

/// Plan a push of every tag missing from `remote`
pub fn plan_tag_push(repo: &dyn RepositoryQuery, remote: &str) -> Result<PushPlan> {
    let tags = detect_new_tags(repo, remote)?
        .into_iter()
        .map(|name| {
            Ok(NewTag {
                target: repo.tag_target(&name)?,
                name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PushPlan {
        tags,
        ..PushPlan::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::fake::FakeRepository;
    use crate::types::Target;

    fn merge_repo() -> FakeRepository {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("side", &["a"], "Branch commit")
            .commit("merge", &["a", "side"], "Merge branch")
            .branch("branch", "side")
            .branch("main", "merge")
            .reference("origin/main", "a")
            .tag("v1.0", "a")
            .tag("v2.0", "merge")
            .remote_tag("origin", "v1.0");
        repo
    }

    #[test]
    fn test_plan_commit_push_merge() {
        let repo = merge_repo();
        let plan = plan_commit_push(&repo, "main", "origin/main").unwrap();

        assert_eq!(plan.commits.len(), 2);
        assert_eq!(plan.actions.len(), 1);
        assert!(plan.tags.is_empty());
        assert!(plan.fast_forward().is_none());
        assert_eq!(
            plan.lando_actions(),
            vec![LandoAction::MergeOnto {
                commit_message: "Merge branch".to_string(),
                target: "branch".to_string(),
            }]
        );
    }

    #[test]
    fn test_plan_commit_push_up_to_date() {
        let repo = merge_repo();
        let plan = plan_commit_push(&repo, "origin/main", "origin/main").unwrap();
        assert!(plan.is_empty());
        assert!(plan.classification.is_none());
    }

    #[test]
    fn test_plan_commit_push_fast_forward() {
        let mut repo = FakeRepository::new();
        repo.commit("a", &[], "Initial commit")
            .commit("ff", &["a"], "FF commit")
            .branch("main", "ff")
            .reference("origin/main", "a");

        let plan = plan_commit_push(&repo, "main", "origin/main").unwrap();
        let ff = plan.fast_forward().expect("fast-forward");
        assert_eq!(ff.commit_message, "FF commit");
        assert_eq!(ff.target, Target::Commit("a".to_string()));
        assert_eq!(plan.actions.len(), 1);
    }

    #[test]
    fn test_plan_tag_push() {
        let repo = merge_repo();
        let plan = plan_tag_push(&repo, "origin").unwrap();

        assert!(plan.actions.is_empty());
        assert_eq!(
            plan.tags,
            vec![NewTag {
                name: "v2.0".to_string(),
                target: "merge".to_string(),
            }]
        );
        assert!(matches!(
            plan.lando_actions().as_slice(),
            [LandoAction::Tag { name, .. }] if name == "v2.0"
        ));
    }
}
