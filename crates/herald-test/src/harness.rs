//! Test harness helpers.

use herald_telemetry::LogConfig;
use tracing_subscriber::EnvFilter;

/// Set up test logging with the specified filter.
///
/// This initializes the tracing subscriber for tests, writing through the
/// test harness so output is captured per test. Safe to call from every
/// test; only the first call installs a subscriber. An unparsable filter
/// falls back to `warn`.
///
/// # Example
///
/// ```rust
/// use herald_test::setup_test_logging;
///
/// setup_test_logging("herald_events=trace");
/// ```
pub fn setup_test_logging(filter: &str) {
    let filter = LogConfig::new(filter)
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Set up test logging with default filter (warn level).
pub fn setup_test_logging_default() {
    setup_test_logging("warn");
}
