//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `fallback_filter`. Output goes to stderr
/// so log lines never interleave with the rendered list. Calling this more
/// than once is harmless; later calls are ignored.
pub fn init(fallback_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}
