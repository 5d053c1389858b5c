//! Test logging setup.

use tracing_subscriber::EnvFilter;

/// Initializes a test-friendly tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaults to `info` otherwise. Safe to call
/// from every test; repeat initializations are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
