//! `RepositoryQuery` backed by the `git` executable

use crate::error::{Error, Result};
use crate::repo::RepositoryQuery;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::LazyLock;
use tracing::debug;

/// SHA-1 or SHA-256 object names as printed by git
static HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9a-f]{40}|[0-9a-f]{64})$").expect("hardcoded hash pattern is valid")
});

/// Flags that keep diff output independent of user configuration
const DIFF_FLAGS: &[&str] = &[
    "--patch",
    "--no-color",
    "--no-ext-diff",
    "--binary",
    "--src-prefix=a/",
    "--dst-prefix=b/",
    "--no-commit-id",
];

/// A git working copy queried through subprocess calls
#[derive(Debug, Clone)]
pub struct GitRepository {
    root: PathBuf,
}

impl GitRepository {
    /// Open the repository containing `path`
    pub fn open(path: &Path) -> Result<Self> {
        let output = Command::new("git")
            .arg("-C")
            .arg(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()?;

        if !output.status.success() {
            return Err(Error::Repository(format!(
                "{} is not a git repository: {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());
        debug!("Opened repository at {}", root.display());
        Ok(Self { root })
    }

    /// Top-level directory of the working copy
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run git and return its raw output, whatever the exit status
    fn git(&self, args: &[&str]) -> Result<Output> {
        debug!("git {}", args.join(" "));
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .output()?;
        Ok(output)
    }

    /// Run git, requiring success, and return stdout
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.git(args)?;
        if !output.status.success() {
            return Err(Error::Repository(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        String::from_utf8(output.stdout)
            .map_err(|_| Error::Repository(format!("git {} printed invalid UTF-8", args.join(" "))))
    }

    /// Raw commit object, parsed into parents and message
    fn read_commit(&self, hash: &str) -> Result<(Vec<String>, String)> {
        let output = self.git(&["cat-file", "commit", hash])?;
        if !output.status.success() {
            return Err(cat_file_failure(hash, &String::from_utf8_lossy(&output.stderr)));
        }
        let raw = String::from_utf8(output.stdout).map_err(|_| {
            Error::Repository(format!("commit {hash} is not valid UTF-8"))
        })?;
        parse_commit_object(&raw)
    }
}

impl RepositoryQuery for GitRepository {
    fn current_branch(&self) -> Result<String> {
        let output = self.git(&["symbolic-ref", "--quiet", "--short", "HEAD"])?;
        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout).trim().to_string()),
            Some(1) => Err(Error::DetachedHead),
            _ => Err(Error::Repository(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            )),
        }
    }

    fn resolve(&self, rev: &str) -> Result<String> {
        let peeled = format!("{rev}^{{commit}}");
        let output = self.git(&["rev-parse", "--verify", "--quiet", &peeled])?;
        if !output.status.success() {
            return Err(Error::RefNotFound(rev.to_string()));
        }
        parse_hash(String::from_utf8_lossy(&output.stdout).trim())
    }

    fn commits_between(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let base = self.resolve(base)?;
        let head = self.resolve(head)?;
        let range = format!("{base}..{head}");
        self.run(&["rev-list", "--reverse", "--topo-order", &range])?
            .lines()
            .map(parse_hash)
            .collect()
    }

    fn commit_message(&self, hash: &str) -> Result<String> {
        self.read_commit(hash).map(|(_, message)| message)
    }

    fn parents(&self, hash: &str) -> Result<Vec<String>> {
        self.read_commit(hash).map(|(parents, _)| parents)
    }

    fn patch_text(&self, hash: &str) -> Result<String> {
        let (parents, message) = self.read_commit(hash)?;

        // Root commits diff against the empty tree; merges against their mainline parent.
        let mut args = vec!["diff-tree"];
        args.extend_from_slice(DIFF_FLAGS);
        match parents.first() {
            Some(mainline) => args.extend([mainline.as_str(), hash]),
            None => args.extend(["--root", hash]),
        }

        let output = self.git(&args)?;
        if !output.status.success() {
            return Err(Error::PatchUnavailable {
                commit: hash.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let diff = String::from_utf8(output.stdout).map_err(|_| Error::PatchUnavailable {
            commit: hash.to_string(),
            reason: "diff is not valid UTF-8".to_string(),
        })?;

        Ok(format_patch_document(&message, &diff))
    }

    fn branches_at(&self, hash: &str) -> Result<Vec<String>> {
        Ok(self
            .run(&[
                "for-each-ref",
                "--points-at",
                hash,
                "--format=%(refname:short)",
                "refs/heads/",
            ])?
            .lines()
            .filter(|line| !line.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    fn local_tags(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .run(&["for-each-ref", "--format=%(refname)", "refs/tags/"])?
            .lines()
            .filter_map(|line| line.strip_prefix("refs/tags/"))
            .map(ToString::to_string)
            .collect())
    }

    fn remote_tags(&self, remote: &str) -> Result<BTreeSet<String>> {
        Ok(parse_ls_remote_tags(&self.run(&[
            "ls-remote",
            "--tags",
            "--refs",
            remote,
        ])?))
    }

    fn tag_target(&self, name: &str) -> Result<String> {
        self.resolve(&format!("refs/tags/{name}"))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let output = self.git(&["remote", "get-url", "--push", remote])?;
        if !output.status.success() {
            return Err(Error::Repository(format!("no such remote: {remote}")));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Missing objects are `RefNotFound`; anything else git reports is a repository error
fn cat_file_failure(hash: &str, stderr: &str) -> Error {
    let stderr = stderr.trim();
    if stderr.contains("Not a valid object name") || stderr.ends_with(": bad file") {
        Error::RefNotFound(hash.to_string())
    } else {
        Error::Repository(format!("git cat-file commit {hash} failed: {stderr}"))
    }
}

fn parse_hash(line: &str) -> Result<String> {
    if HASH_RE.is_match(line) {
        Ok(line.to_string())
    } else {
        Err(Error::Repository(format!("unexpected object name: {line:?}")))
    }
}

/// Split a raw commit object into its parent list and message
///
/// Headers run up to the first empty line; continuation lines of multi-line
/// headers (signatures) start with a space and never match `parent `.
fn parse_commit_object(raw: &str) -> Result<(Vec<String>, String)> {
    let (headers, message) = raw.split_once("\n\n").unwrap_or((raw, ""));
    let parents = headers
        .lines()
        .filter_map(|line| line.strip_prefix("parent "))
        .map(parse_hash)
        .collect::<Result<Vec<_>>>()?;
    Ok((parents, message.to_string()))
}

/// Commit message, one blank line, then the diff
fn format_patch_document(message: &str, diff: &str) -> String {
    let mut patch = String::with_capacity(message.len() + diff.len() + 2);
    patch.push_str(message);
    if !message.ends_with('\n') {
        patch.push('\n');
    }
    patch.push('\n');
    patch.push_str(diff);
    patch
}

fn parse_ls_remote_tags(output: &str) -> BTreeSet<String> {
    output
        .lines()
        .filter_map(|line| line.split_once('\t'))
        .filter_map(|(_, refname)| refname.strip_prefix("refs/tags/"))
        .map(|name| name.trim_end_matches("^{}").to_string())
        .collect()
}
