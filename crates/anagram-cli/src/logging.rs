use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter.
///
/// A level given on the command line wins, then `RUST_LOG`, then the
/// configured directive. An unparsable directive falls back to `info`.
pub fn build_filter(cli_level: Option<LevelFilter>, configured: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.to_string());
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init(cli_level: Option<LevelFilter>, configured: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(cli_level, configured))
        .with_target(false)
        .init();
}
