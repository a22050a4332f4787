//! # Input Module
//!
//! Turns the statusLine hook payload into a [`SessionContext`]. Parsing never
//! fails: a field of the wrong type falls back to its own default, and input
//! that is not a JSON object at all yields the all-default context.

use crate::models::hook::{HookContextWindow, HookCost};
use crate::models::{ContextWindowUsage, HookJson, SessionContext};

pub fn parse_session(raw: &[u8]) -> SessionContext {
    if raw.iter().all(u8::is_ascii_whitespace) {
        tracing::warn!("empty hook payload, rendering defaults");
        return SessionContext::default();
    }
    match serde_json::from_slice::<HookJson>(raw) {
        Ok(hook) => session_from_hook(hook),
        Err(err) => {
            tracing::warn!(error = %err, "malformed hook payload, rendering defaults");
            SessionContext::default()
        }
    }
}

pub fn session_from_hook(hook: HookJson) -> SessionContext {
    let working_dir = hook
        .workspace
        .and_then(|w| w.current_dir)
        .unwrap_or_default();
    let (cost_total_usd, duration_ms) = cost_fields(hook.cost.as_ref());

    SessionContext {
        working_dir,
        context_window: hook.context_window.as_ref().and_then(context_usage),
        cost_total_usd,
        duration_ms,
    }
}

fn cost_fields(cost: Option<&HookCost>) -> (f64, u64) {
    let Some(c) = cost else {
        return (0.0, 0);
    };
    let usd = c
        .total_cost_usd
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0);
    (usd, c.total_duration_ms.unwrap_or(0))
}

// A null current_usage means no usage data, not zero usage
fn context_usage(cw: &HookContextWindow) -> Option<ContextWindowUsage> {
    let usage = cw.current_usage?;
    let window_size_tokens = cw.context_window_size.filter(|&s| s > 0)?;
    let current_usage_tokens = usage
        .input_tokens
        .unwrap_or(0)
        .saturating_add(usage.cache_creation_input_tokens.unwrap_or(0))
        .saturating_add(usage.cache_read_input_tokens.unwrap_or(0));
    Some(ContextWindowUsage {
        current_usage_tokens,
        window_size_tokens,
    })
}
