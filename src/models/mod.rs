pub mod git;
pub mod hook;
pub mod session;

pub use git::{GitDiffStats, GitInfo};
pub use hook::HookJson;
pub use session::{ContextWindowUsage, SessionContext};
