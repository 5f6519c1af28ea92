use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Initializes the `tracing` logging framework.
///
/// Regular CLI output is influenced by the
/// [`RUST_LOG`](tracing_subscriber::filter::EnvFilter) environment variable.
/// The default filter only lets warnings through, so that log lines don't
/// interleave with the interactive form.
pub fn init() {
    let log_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().compact().with_filter(log_filter))
        .init();
}
