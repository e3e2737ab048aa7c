//! In-memory repository for exercising history logic without git

use crate::error::{Error, Result};
use crate::repo::RepositoryQuery;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Debug, Clone)]
struct FakeCommit {
    parents: Vec<String>,
    message: String,
}

/// Commit graph, refs and tags held in maps
#[derive(Debug, Default)]
pub(crate) struct FakeRepository {
    commits: BTreeMap<String, FakeCommit>,
    refs: BTreeMap<String, String>,
    branches: BTreeMap<String, String>,
    tags: BTreeMap<String, String>,
    remote_tags: BTreeMap<String, BTreeSet<String>>,
    unpatchable: HashSet<String>,
}

impl FakeRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a commit; parents must already exist
    pub(crate) fn commit(&mut self, hash: &str, parents: &[&str], message: &str) -> &mut Self {
        self.commits.insert(
            hash.to_string(),
            FakeCommit {
                parents: parents.iter().map(ToString::to_string).collect(),
                message: message.to_string(),
            },
        );
        self
    }

    /// Point a local branch (also resolvable as a ref) at a commit
    pub(crate) fn branch(&mut self, name: &str, hash: &str) -> &mut Self {
        self.branches.insert(name.to_string(), hash.to_string());
        self.refs.insert(name.to_string(), hash.to_string());
        self
    }

    /// Point a non-branch ref (e.g. remote-tracking) at a commit
    pub(crate) fn reference(&mut self, name: &str, hash: &str) -> &mut Self {
        self.refs.insert(name.to_string(), hash.to_string());
        self
    }

    pub(crate) fn tag(&mut self, name: &str, hash: &str) -> &mut Self {
        self.tags.insert(name.to_string(), hash.to_string());
        self
    }

    pub(crate) fn remote_tag(&mut self, remote: &str, name: &str) -> &mut Self {
        self.remote_tags
            .entry(remote.to_string())
            .or_default()
            .insert(name.to_string());
        self
    }

    /// Make `patch_text` fail for a commit
    pub(crate) fn break_patch(&mut self, hash: &str) -> &mut Self {
        self.unpatchable.insert(hash.to_string());
        self
    }

    fn get(&self, hash: &str) -> Result<&FakeCommit> {
        self.commits
            .get(hash)
            .ok_or_else(|| Error::RefNotFound(hash.to_string()))
    }

    /// Ancestors of `hash` (inclusive), parents before children
    fn ancestry(&self, hash: &str) -> Result<Vec<String>> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();
        self.visit(hash, &mut seen, &mut order)?;
        Ok(order)
    }

    fn visit(&self, hash: &str, seen: &mut HashSet<String>, order: &mut Vec<String>) -> Result<()> {
        if !seen.insert(hash.to_string()) {
            return Ok(());
        }
        for parent in &self.get(hash)?.parents {
            self.visit(parent, seen, order)?;
        }
        order.push(hash.to_string());
        Ok(())
    }
}

impl RepositoryQuery for FakeRepository {
    fn current_branch(&self) -> Result<String> {
        Err(Error::DetachedHead)
    }

    fn resolve(&self, rev: &str) -> Result<String> {
        if let Some(hash) = self.refs.get(rev) {
            return Ok(hash.clone());
        }
        if let Some(hash) = rev.strip_prefix("refs/tags/").and_then(|t| self.tags.get(t)) {
            return Ok(hash.clone());
        }
        self.get(rev).map(|_| rev.to_string())
    }

    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let excluded: HashSet<String> = self.ancestry(&self.resolve(base)?)?.into_iter().collect();
        Ok(self
            .ancestry(&self.resolve(head)?)?
            .into_iter()
            .filter(|hash| !excluded.contains(hash))
            .collect())
    }

    fn commit_message(&self, hash: &str) -> Result<String> {
        Ok(self.get(hash)?.message.clone())
    }

    fn parents(&self, hash: &str) -> Result<Vec<String>> {
        Ok(self.get(hash)?.parents.clone())
    }

    fn patch_text(&self, hash: &str) -> Result<String> {
        let commit = self.get(hash)?;
        if self.unpatchable.contains(hash) {
            return Err(Error::PatchUnavailable {
                commit: hash.to_string(),
                reason: "broken".to_string(),
            });
        }
        Ok(format!(
            "{}\n\ndiff --git a/{hash} b/{hash}\n+{hash}\n",
            commit.message
        ))
    }

    fn branches_at(&self, hash: &str) -> Result<Vec<String>> {
        Ok(self
            .branches
            .iter()
            .filter(|(_, target)| *target == hash)
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn local_tags(&self) -> Result<BTreeSet<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn remote_tags(&self, remote: &str) -> Result<BTreeSet<String>> {
        Ok(self.remote_tags.get(remote).cloned().unwrap_or_default())
    }

    fn tag_target(&self, name: &str) -> Result<String> {
        self.tags
            .get(name)
            .cloned()
            .ok_or_else(|| Error::RefNotFound(name.to_string()))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        Ok(format!("https://example.test/{remote}.git"))
    }
}
