// Logging setup for the CLI: a `tracing` fmt subscriber on standard error.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the CLI verbosity to a default level filter.
///
/// `RUST_LOG`, when set, takes precedence over this default.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Log lines go to standard error so they
/// never mix with generated domains on standard output.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
