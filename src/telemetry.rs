use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber. Filter comes from `RUST_LOG`,
/// defaulting to `info`. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
