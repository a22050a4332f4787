#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextWindowUsage {
    /// input + cache creation + cache read tokens
    pub current_usage_tokens: u64,
    /// Always greater than zero
    pub window_size_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    pub working_dir: String,
    pub context_window: Option<ContextWindowUsage>,
    pub cost_total_usd: f64,
    pub duration_ms: u64,
}
