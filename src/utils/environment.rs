use chrono::{Datelike, Utc};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Current calendar year in UTC, the default analysis year
pub fn current_utc_year() -> i32 {
    Utc::now().year()
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Only the binary calls this; the library never installs a subscriber. Repeated calls are
/// ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_utc_year_is_plausible() {
        let year = current_utc_year();
        assert!(year >= 2024);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging();
        init_logging();
    }
}
