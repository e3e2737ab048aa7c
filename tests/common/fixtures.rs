//! Temporary git repositories for integration tests
//!
//! Not every helper is used by every test binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A working repository on `main` with a bare `origin`
///
/// `new` leaves one pushed commit ("Initial commit"), so `origin/main` exists
/// and matches `main`.
pub struct TestRepo {
    dir: TempDir,
    work: PathBuf,
    remote: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let remote = dir.path().join("remote.git");
        let work = dir.path().join("local");
        fs::create_dir_all(&work).expect("failed to create work dir");

        git_in(dir.path(), &["init", "--bare", "--quiet", path_str(&remote)]);

        let repo = Self { dir, work, remote };
        repo.git(&["init", "--quiet"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["config", "tag.gpgsign", "false"]);
        repo.git(&["remote", "add", "origin", path_str(&repo.remote)]);

        repo.commit_file("README.md", "# Test Repo\n", "Initial commit");
        repo.git(&["push", "--quiet", "-u", "origin", "main:main"]);
        repo
    }

    /// Working tree path
    pub fn path(&self) -> &Path {
        &self.work
    }

    /// Bare remote path
    pub fn remote_path(&self) -> &Path {
        &self.remote
    }

    /// Scratch directory next to the repositories
    pub fn scratch(&self) -> &Path {
        self.dir.path()
    }

    /// Run git in the working tree, returning trimmed stdout
    pub fn git(&self, args: &[&str]) -> String {
        git_in(&self.work, args)
    }

    /// Write `contents` to `file` and commit it, returning the new hash
    pub fn commit_file(&self, file: &str, contents: &str, message: &str) -> String {
        fs::write(self.work.join(file), contents).expect("failed to write file");
        self.git(&["add", file]);
        self.git(&["commit", "--quiet", "-m", message]);
        self.head()
    }

    /// Hash of HEAD
    pub fn head(&self) -> String {
        self.rev_parse("HEAD")
    }

    pub fn rev_parse(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev])
    }
}

fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}
