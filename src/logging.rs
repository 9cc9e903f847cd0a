use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "CONNECT4_LOG";

/// Build the filter from `CONNECT4_LOG`, falling back to `default_filter`
/// and then to `warn` if neither parses.
pub fn filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr `fmt` subscriber. Board output goes to stdout, so the two
/// never interleave on the same stream. Calling this twice is a no-op.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(default_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
