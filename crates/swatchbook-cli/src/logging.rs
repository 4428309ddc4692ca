//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Level used when nothing else asks for one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the filter directive from `-v` count and the config file.
///
/// `-v` is `info`, `-vv` is `debug`, `-vvv` and more is `trace`. Without
/// `-v` the config value applies, then [`DEFAULT_LEVEL`].
pub fn level_directive(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LEVEL).to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over everything.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level_directive(verbosity, configured)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
