use std::env;
use std::io::Write;

use owo_colors::{OwoColorize, Style};

use crate::cli::ColorArg;
use crate::models::{ContextWindowUsage, GitInfo, SessionContext};
use crate::utils::{abbreviate, dir_basename, format_currency, format_duration};

pub(crate) const BAR_WIDTH: u64 = 10;
const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';
const DIVIDER: &str = " │ ";
const RESET: &str = "\x1b[0m";

/// Styling applied to each part of the line
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colored: bool,
    pub dir: Style,
    pub branch: Style,
    pub added: Style,
    pub removed: Style,
    pub bar_low: Style,
    pub bar_mid: Style,
    pub bar_high: Style,
    pub bar_empty: Style,
    pub value: Style,
    pub muted: Style,
    /// Written once at the very end of the line
    pub reset: &'static str,
}

impl Theme {
    pub fn ansi() -> Self {
        Theme {
            colored: true,
            dir: Style::new().bright_cyan().bold(),
            branch: Style::new().bright_magenta(),
            added: Style::new().green(),
            removed: Style::new().red(),
            bar_low: Style::new().green(),
            bar_mid: Style::new().yellow(),
            bar_high: Style::new().red(),
            bar_empty: Style::new().bright_black().dimmed(),
            value: Style::new().bright_white().bold(),
            muted: Style::new().bright_black().dimmed(),
            reset: RESET,
        }
    }

    /// No escape codes at all, including the trailing reset
    pub fn plain() -> Self {
        Theme {
            colored: false,
            dir: Style::new(),
            branch: Style::new(),
            added: Style::new(),
            removed: Style::new(),
            bar_low: Style::new(),
            bar_mid: Style::new(),
            bar_high: Style::new(),
            bar_empty: Style::new(),
            value: Style::new(),
            muted: Style::new(),
            reset: "",
        }
    }

    /// Respect NO_COLOR in auto mode
    pub fn from_arg(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Always => Theme::ansi(),
            ColorArg::Never => Theme::plain(),
            ColorArg::Auto if env::var_os("NO_COLOR").is_some() => Theme::plain(),
            ColorArg::Auto => Theme::ansi(),
        }
    }

    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.colored {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    fn bar_style(&self, pct: u64) -> Style {
        if pct >= 80 {
            self.bar_high
        } else if pct >= 50 {
            self.bar_mid
        } else {
            self.bar_low
        }
    }
}

/// Context-window utilization as a fixed-width bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageBar {
    /// Not clamped; usage beyond the window shows above 100
    pub percentage: u64,
    pub filled: u64,
    pub empty: u64,
}

impl UsageBar {
    pub fn from_usage(usage: Option<&ContextWindowUsage>) -> Self {
        let percentage = usage.map_or(0, |u| {
            if u.window_size_tokens == 0 {
                return 0;
            }
            let pct = u128::from(u.current_usage_tokens) * 100 / u128::from(u.window_size_tokens);
            u64::try_from(pct).unwrap_or(u64::MAX)
        });
        // the glyph count is clamped so the bar never outgrows its brackets
        let filled = (percentage / 10).min(BAR_WIDTH);
        UsageBar {
            percentage,
            filled,
            empty: BAR_WIDTH - filled,
        }
    }

    pub fn render(&self, theme: &Theme) -> String {
        let filled: String = std::iter::repeat_n(BAR_FILLED, self.filled as usize).collect();
        let empty: String = std::iter::repeat_n(BAR_EMPTY, self.empty as usize).collect();
        format!(
            "{}{}{}{} {}",
            theme.paint("[", theme.muted),
            theme.paint(&filled, theme.bar_style(self.percentage)),
            theme.paint(&empty, theme.bar_empty),
            theme.paint("]", theme.muted),
            theme.paint(&format!("{}%", self.percentage), theme.value),
        )
    }
}

fn diff_segment(info: &GitInfo, theme: &Theme) -> Option<String> {
    let stats = info.stats;
    if stats.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(2);
    if stats.added > 0 {
        parts.push(theme.paint(&format!("+{}", abbreviate(stats.added)), theme.added));
    }
    if stats.removed > 0 {
        parts.push(theme.paint(&format!("-{}", abbreviate(stats.removed)), theme.removed));
    }
    Some(parts.join(" "))
}

/// Ordered segments of the line; `None` marks an omitted segment
pub fn build_segments(
    ctx: &SessionContext,
    git: Option<&GitInfo>,
    theme: &Theme,
) -> Vec<Option<String>> {
    let dir = dir_basename(&ctx.working_dir);
    let branch = git.filter(|g| !g.branch.is_empty());

    vec![
        (!dir.is_empty()).then(|| theme.paint(&dir, theme.dir)),
        branch.map(|g| theme.paint(&g.branch, theme.branch)),
        git.and_then(|g| diff_segment(g, theme)),
        Some(UsageBar::from_usage(ctx.context_window.as_ref()).render(theme)),
        Some(format!(
            "{}{}",
            theme.paint("$", theme.muted),
            theme.paint(&format_currency(ctx.cost_total_usd), theme.value)
        )),
        Some(theme.paint(&format_duration(ctx.duration_ms), theme.value)),
    ]
}

/// Join present segments with the divider; absent ones leave no trace
pub fn join_segments(segments: Vec<Option<String>>, divider: &str) -> String {
    segments.into_iter().flatten().collect::<Vec<_>>().join(divider)
}

pub fn compose_line(ctx: &SessionContext, git: Option<&GitInfo>, theme: &Theme) -> String {
    let divider = theme.paint(DIVIDER, theme.muted);
    let mut line = join_segments(build_segments(ctx, git, theme), &divider);
    line.push_str(theme.reset);
    line
}

pub fn print_text_output(
    ctx: &SessionContext,
    git: Option<&GitInfo>,
    theme: &Theme,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", compose_line(ctx, git, theme))?;
    out.flush()?;
    Ok(())
}

pub fn build_json_output(ctx: &SessionContext, git: Option<&GitInfo>) -> serde_json::Value {
    let bar = UsageBar::from_usage(ctx.context_window.as_ref());
    serde_json::json!({
        "dir": dir_basename(&ctx.working_dir),
        "cwd": ctx.working_dir,
        "branch": git.map(|g| g.branch.as_str()),
        "diff": git.map(|g| g.stats),
        "context": ctx.context_window.map(|c| serde_json::json!({
            "used_tokens": c.current_usage_tokens,
            "window_size": c.window_size_tokens,
            "percent": bar.percentage,
        })),
        "cost_usd": (ctx.cost_total_usd * 100.0).round() / 100.0,
        "duration_ms": ctx.duration_ms,
        "duration": format_duration(ctx.duration_ms),
    })
}

pub fn print_json_output(ctx: &SessionContext, git: Option<&GitInfo>) -> anyhow::Result<()> {
    let json = build_json_output(ctx, git);
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", serde_json::to_string(&json)?)?;
    out.flush()?;
    Ok(())
}
