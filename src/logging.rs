use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber when debugging. Without it, tracing events
/// are dropped and stderr stays silent.
pub fn init(debug: bool) {
    if !debug {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
