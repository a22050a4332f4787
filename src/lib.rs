//! # Session Statusline
//!
//! A single-line statusline for interactive coding-assistant sessions.
//!
//! ## Overview
//!
//! The binary reads the session's JSON hook payload from stdin and prints one
//! styled line combining:
//! - Workspace directory name
//! - Git branch and combined staged/unstaged line changes
//! - Context window utilization as a 10-glyph bar
//! - Session cost and elapsed duration
//!
//! Every missing input degrades to a default, so a line is always printed.
//!
//! ## Features
//!
//! - `git` (default): Repository discovery and branch lookup via gix

/// Command-line argument parsing
pub mod cli;

/// Segment rendering, theme, and line composition
pub mod display;

/// Version-control probe
pub mod git;

/// Hook payload parsing into a session context
pub mod input;

/// stderr diagnostics
pub mod logging;

/// Data models for hook input, session context, and Git state
pub mod models;

/// Formatting helpers for numbers, durations, and paths
pub mod utils;
