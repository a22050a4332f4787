//! # Git Module
//!
//! Provides the version-control probe behind the branch and diff segments.
//!
//! ## Features
//!
//! - Repository discovery by ancestor search
//! - Branch name of HEAD (empty when detached)
//! - Added/removed line counts summed over the unstaged and staged diff
//!
//! With the `git` feature (default) discovery and branch resolution go through
//! gix; diff stats always shell out to `git diff --numstat`. Every failure
//! degrades to "no repository" or zero stats.

use anyhow::{Context, Result, bail};
#[cfg(feature = "git")]
use std::cell::RefCell;
#[cfg(feature = "git")]
use std::path::PathBuf;
use std::path::Path;
use std::process::Command;

use crate::models::{GitDiffStats, GitInfo};

/// Narrow query surface over a version-control system
pub trait VersionControlProbe {
    /// Whether `dir` is inside a working tree
    fn discover(&self, dir: &Path) -> bool;

    fn resolve_branch(&self, dir: &Path) -> String;

    /// Combined staged and unstaged line counts
    fn compute_diff_stats(&self, dir: &Path) -> GitDiffStats;
}

/// Query the probe for everything the statusline needs. `None` means the
/// directory is not under version control.
pub fn probe(vcs: &dyn VersionControlProbe, dir: &Path) -> Option<GitInfo> {
    if dir.as_os_str().is_empty() || !vcs.discover(dir) {
        tracing::debug!(dir = %dir.display(), "not a git working tree");
        return None;
    }
    Some(GitInfo {
        branch: vcs.resolve_branch(dir),
        stats: vcs.compute_diff_stats(dir),
    })
}

/// Probe backed by the `git` executable (and gix when enabled). The gix
/// repository found for a directory is reused by later queries on that
/// directory.
#[derive(Default)]
pub struct GitProbe {
    #[cfg(feature = "git")]
    repo: RefCell<Option<(PathBuf, Option<gix::Repository>)>>,
}

impl GitProbe {
    pub fn new() -> Self {
        GitProbe::default()
    }

    #[cfg(feature = "git")]
    fn with_repo<R>(&self, dir: &Path, f: impl FnOnce(&gix::Repository) -> R) -> Option<R> {
        let mut cached = self.repo.borrow_mut();
        if cached.as_ref().is_none_or(|(seen, _)| seen != dir) {
            let repo = match gix::discover(dir) {
                Ok(repo) => Some(repo),
                Err(err) => {
                    tracing::debug!(error = %err, "gix discover failed");
                    None
                }
            };
            *cached = Some((dir.to_path_buf(), repo));
        }
        cached.as_ref().and_then(|(_, repo)| repo.as_ref()).map(f)
    }
}

impl VersionControlProbe for GitProbe {
    #[cfg(feature = "git")]
    fn discover(&self, dir: &Path) -> bool {
        self.with_repo(dir, |repo| repo.workdir().is_some())
            .unwrap_or(false)
    }

    #[cfg(not(feature = "git"))]
    fn discover(&self, dir: &Path) -> bool {
        run_git(dir, &["rev-parse", "--is-inside-work-tree"])
            .map(|out| out.trim() == "true")
            .unwrap_or(false)
    }

    #[cfg(feature = "git")]
    fn resolve_branch(&self, dir: &Path) -> String {
        self.with_repo(dir, |repo| {
            repo.head()
                .ok()
                .and_then(|head| head.referent_name().map(|name| name.shorten().to_string()))
        })
        .flatten()
        .unwrap_or_default()
    }

    #[cfg(not(feature = "git"))]
    fn resolve_branch(&self, dir: &Path) -> String {
        // symbolic-ref exits non-zero on a detached HEAD
        run_git(dir, &["symbolic-ref", "--short", "-q", "HEAD"])
            .map(|out| out.trim().to_string())
            .unwrap_or_default()
    }

    fn compute_diff_stats(&self, dir: &Path) -> GitDiffStats {
        let unstaged = numstat(dir, &["diff", "--numstat"]);
        let staged = numstat(dir, &["diff", "--cached", "--numstat"]);
        unstaged + staged
    }
}

fn numstat(dir: &Path, args: &[&str]) -> GitDiffStats {
    match run_git(dir, args) {
        Ok(out) => parse_numstat(&out),
        Err(err) => {
            tracing::debug!(error = %format!("{err:#}"), ?args, "git diff failed");
            GitDiffStats::default()
        }
    }
}

fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["-c", "core.fileMode=false"])
        .args(args)
        .output()
        .context("spawn git")?;
    if !output.status.success() {
        bail!(
            "git {} exited with {}",
            args.join(" "),
            output.status.code().unwrap_or(-1)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Sum `git diff --numstat` output. Binary files report `-` and count as 0.
pub fn parse_numstat(out: &str) -> GitDiffStats {
    out.lines()
        .filter_map(|line| {
            let mut cols = line.split('\t');
            let added = cols.next()?.trim();
            let removed = cols.next()?.trim();
            Some(GitDiffStats {
                added: added.parse().unwrap_or(0),
                removed: removed.parse().unwrap_or(0),
            })
        })
        .fold(GitDiffStats::default(), |acc, s| acc + s)
}
