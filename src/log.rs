//! Logging initialization.
//!
//! Detects whether the process runs in Kubernetes by looking for the
//! `KUBERNETES_SERVICE_HOST` environment variable. In Kubernetes, logs go to
//! stdout as JSON with a default level of `info`; elsewhere they use the
//! human-readable single-line format with a default level of `debug`. Set
//! `LOG_LEVEL` to any tracing filter directive to override the level.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber. Calling this more than once is
/// a no-op.
pub fn init() {
    let in_kubernetes = std::env::var_os("KUBERNETES_SERVICE_HOST").is_some();
    let default_level = if in_kubernetes { "info" } else { "debug" };

    let filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if in_kubernetes {
        builder.json().try_init().ok();
    } else {
        builder.try_init().ok();
    }
}
