//! FILENAME: app/src/logging.rs
// PURPOSE: Logging setup for the command-line binary.

/// Fixed filter: library chatter stays quiet, run progress is shown.
pub const LOG_FILTER: &str = "warn,sales_report=info,persistence=info";

/// Installs the stderr subscriber. Stdout is left for the completion notice.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(LOG_FILTER)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
