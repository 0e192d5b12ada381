use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Without `debug` the level is pinned to `info` and `RUST_LOG` is ignored.
/// With it, `RUST_LOG` wins when set and `debug` is the fallback.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    // A subscriber may already be installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
