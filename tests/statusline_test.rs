use std::path::Path;

use session_statusline::display::{Theme, compose_line};
use session_statusline::git::{GitProbe, VersionControlProbe, probe};
use session_statusline::input::parse_session;
use session_statusline::models::GitDiffStats;
use tempfile::TempDir;

/// Probe double returning canned answers
struct FixedProbe {
    branch: &'static str,
    unstaged: GitDiffStats,
    staged: GitDiffStats,
}

impl VersionControlProbe for FixedProbe {
    fn discover(&self, _dir: &Path) -> bool {
        true
    }
    fn resolve_branch(&self, _dir: &Path) -> String {
        self.branch.to_string()
    }
    fn compute_diff_stats(&self, _dir: &Path) -> GitDiffStats {
        self.unstaged + self.staged
    }
}

#[test]
fn end_to_end_outside_repository() {
    let temp_dir = TempDir::new().unwrap();
    let proj = temp_dir.path().join("proj");
    std::fs::create_dir(&proj).unwrap();
    let payload = format!(
        r#"{{"workspace":{{"current_dir":"{}"}},"cost":{{"total_cost_usd":1.234,"total_duration_ms":65000}}}}"#,
        proj.display()
    );

    let ctx = parse_session(payload.as_bytes());
    let git = probe(&GitProbe::new(), Path::new(&ctx.working_dir));
    assert!(git.is_none(), "temp dir should not be a repository");

    let line = compose_line(&ctx, git.as_ref(), &Theme::plain());
    assert_eq!(line, "proj │ [░░░░░░░░░░] 0% │ $1.23 │ 1m 5s");
}

#[test]
fn combined_diff_stats_render_both_segments() {
    let vcs = FixedProbe {
        branch: "feature/bar",
        unstaged: GitDiffStats {
            added: 3,
            removed: 1,
        },
        staged: GitDiffStats {
            added: 2,
            removed: 0,
        },
    };
    let ctx = parse_session(
        br#"{"workspace":{"current_dir":"/src/app"},
             "context_window":{"current_usage":{"input_tokens":90000,"cache_creation_input_tokens":10000,"cache_read_input_tokens":60000},"context_window_size":200000},
             "cost":{"total_cost_usd":12.0,"total_duration_ms":3661000}}"#,
    );
    let git = probe(&vcs, Path::new(&ctx.working_dir)).unwrap();
    assert_eq!(
        git.stats,
        GitDiffStats {
            added: 5,
            removed: 1
        }
    );

    let line = compose_line(&ctx, Some(&git), &Theme::plain());
    assert_eq!(
        line,
        "app │ feature/bar │ +5 -1 │ [████████░░] 80% │ $12.00 │ 61m 1s"
    );
}

#[test]
fn null_current_usage_renders_empty_bar() {
    let ctx = parse_session(
        br#"{"workspace":{"current_dir":"/x/y"},"context_window":{"current_usage":null,"context_window_size":200000}}"#,
    );
    let line = compose_line(&ctx, None, &Theme::plain());
    assert!(line.contains("[░░░░░░░░░░] 0%"));
}

#[test]
fn malformed_payload_still_renders() {
    let ctx = parse_session(b"{ this is not json");
    let line = compose_line(&ctx, None, &Theme::plain());
    assert_eq!(line, "[░░░░░░░░░░] 0% │ $0.00 │ 0m 0s");
}

#[test]
fn colored_line_ends_with_reset() {
    let ctx = parse_session(br#"{"workspace":{"current_dir":"/tmp/proj"}}"#);
    let line = compose_line(&ctx, None, &Theme::ansi());
    assert!(line.ends_with("\x1b[0m"));
    assert!(!compose_line(&ctx, None, &Theme::plain()).contains('\x1b'));
}
