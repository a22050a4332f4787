use serde::Serialize;

/// Added/removed line counts across the unstaged and staged diff
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GitDiffStats {
    pub added: u64,
    pub removed: u64,
}

impl GitDiffStats {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

impl std::ops::Add for GitDiffStats {
    type Output = GitDiffStats;

    fn add(self, rhs: GitDiffStats) -> GitDiffStats {
        GitDiffStats {
            added: self.added.saturating_add(rhs.added),
            removed: self.removed.saturating_add(rhs.removed),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GitInfo {
    /// Empty when HEAD is detached or cannot be resolved
    pub branch: String,
    pub stats: GitDiffStats,
}
