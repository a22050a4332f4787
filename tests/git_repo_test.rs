use std::path::Path;
use std::process::Command;

use session_statusline::git::{GitProbe, VersionControlProbe, probe};
use session_statusline::models::GitDiffStats;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Repository with one commit on `main`; `None` when git is unavailable
fn init_repo() -> Option<TempDir> {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    if !git(dir, &["init", "-q", "-b", "main"]) {
        return None;
    }
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "user.name", "Test"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
    std::fs::write(dir.join("a.txt"), "one\ntwo\nthree\n").unwrap();
    std::fs::write(dir.join("b.txt"), "keep\n").unwrap();
    if !git(dir, &["add", "."]) || !git(dir, &["commit", "-q", "-m", "init"]) {
        return None;
    }
    Some(temp_dir)
}

#[test]
fn real_repository_sums_staged_and_unstaged() {
    let Some(repo) = init_repo() else {
        eprintln!("git not available, skipping");
        return;
    };
    let dir = repo.path();

    // unstaged: +2 lines, -1 line
    std::fs::write(dir.join("a.txt"), "one\nthree\nfour\nfive\n").unwrap();
    // staged: +1 line
    std::fs::write(dir.join("b.txt"), "keep\nadded\n").unwrap();
    assert!(git(dir, &["add", "b.txt"]));

    let info = probe(&GitProbe::new(), dir).expect("repository detected");
    assert_eq!(info.branch, "main");
    assert_eq!(
        info.stats,
        GitDiffStats {
            added: 3,
            removed: 1
        }
    );
}

#[test]
fn subdirectory_is_discovered_through_ancestors() {
    let Some(repo) = init_repo() else {
        eprintln!("git not available, skipping");
        return;
    };
    let sub = repo.path().join("nested/deeper");
    std::fs::create_dir_all(&sub).unwrap();

    let info = probe(&GitProbe::new(), &sub).expect("repository detected from subdirectory");
    assert_eq!(info.branch, "main");
    assert_eq!(info.stats, GitDiffStats::default());
}

#[test]
fn detached_head_has_empty_branch() {
    let Some(repo) = init_repo() else {
        eprintln!("git not available, skipping");
        return;
    };
    let dir = repo.path();
    assert!(git(dir, &["checkout", "-q", "--detach"]));

    let info = probe(&GitProbe::new(), dir).expect("repository detected");
    assert_eq!(info.branch, "");
}

#[test]
fn mode_only_change_is_ignored() {
    let Some(repo) = init_repo() else {
        eprintln!("git not available, skipping");
        return;
    };
    let dir = repo.path();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("a.txt");
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    let info = probe(&GitProbe::new(), dir).expect("repository detected");
    assert_eq!(info.stats, GitDiffStats::default());
}

#[cfg(feature = "git")]
#[test]
fn repository_lookup_is_reused_for_the_same_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let vcs = GitProbe::new();
    assert!(!vcs.discover(dir));

    if !git(dir, &["init", "-q", "-b", "main"]) {
        eprintln!("git not available, skipping");
        return;
    }
    // the earlier lookup for this directory is kept
    assert!(!vcs.discover(dir));
    assert!(GitProbe::new().discover(dir));
}

#[test]
fn one_probe_serves_different_directories() {
    let Some(repo) = init_repo() else {
        eprintln!("git not available, skipping");
        return;
    };
    let outside = TempDir::new().unwrap();
    let vcs = GitProbe::new();

    assert_eq!(probe(&vcs, outside.path()), None);
    let info = probe(&vcs, repo.path()).expect("repository detected");
    assert_eq!(info.branch, "main");
    assert_eq!(probe(&vcs, outside.path()), None);
}
