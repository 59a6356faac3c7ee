//! Diagnostic logging setup
//!
//! Reports go to stdout, so log lines are written to stderr. `RUST_LOG`
//! always wins over `--verbose`.

use tracing_subscriber::EnvFilter;

use crate::constants::logging::{DEFAULT_FILTER, VERBOSE_FILTER};

/// Filter directive used when `RUST_LOG` is not set
pub(crate) fn default_directive(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Install the global subscriber
///
/// A second call is a no-op, which keeps repeated `run()` calls in tests
/// from panicking.
pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "digraph_dfs=debug");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
