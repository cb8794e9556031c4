use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PATHSTEP_LOG";

/// Logs go to stderr so text and JSON output on stdout stay clean.
/// `PATHSTEP_LOG` wins over `RUST_LOG`; without either, `--verbose` picks
/// `debug` and everything else `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
