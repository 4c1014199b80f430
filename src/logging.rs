use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr.
///
/// Filter comes from `RUST_LOG`, defaulting to `warn` so that fetch
/// failures are visible and routine requests are not.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
