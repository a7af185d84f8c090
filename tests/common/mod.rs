use tracing_subscriber::EnvFilter;

/// Logs to the test output when `RUST_LOG` is set, e.g. `RUST_LOG=quotesql=trace`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}
