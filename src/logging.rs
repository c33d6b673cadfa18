use tracing_subscriber::EnvFilter;

/// Initialise logging for the host process. The default level is `info`;
/// passing `debug = true` (usually wired to the settings file) lowers it to
/// `debug` and additionally lets `RUST_LOG` override the filter.
pub fn init(debug: bool) {
    // With debug logging off the filter is pinned to `info` even when
    // `RUST_LOG` happens to be set in the environment, so a stray variable
    // cannot flood the frame loop with per-tick output.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
