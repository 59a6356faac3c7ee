//! Configuration constants for digraph-dfs
//!
//! Defaults used by the command line driver. Most of them can be overridden
//! through flags or `DIGRAPH_DFS_*` environment variables.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, the last one is shown when finished
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "✓"];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default diagram format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "dot";
}

/// Command line input conventions
pub mod input {
    /// Separates source and target in an `--edge` argument
    pub const EDGE_SEPARATOR: char = ':';
}

/// Logging configuration
pub mod logging {
    /// Filter used when `RUST_LOG` is unset
    pub const DEFAULT_FILTER: &str = "warn";

    /// Filter used with `--verbose` when `RUST_LOG` is unset
    pub const VERBOSE_FILTER: &str = "digraph_dfs=debug";
}
