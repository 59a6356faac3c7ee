//! # Configuration Module
//!
//! This module provides configuration structures for all digraph-dfs
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CheckConfig**: Configuration for the `check` command, which reports
//!   cycles, topological order or components
//! - **RenderConfig**: Configuration for the `render` command, which draws the
//!   graph
//!
//! ## Example
//!
//! ```
//! use digraph_dfs::cli::{GraphFormat, OutputFormat};
//! use digraph_dfs::common::{ConfigBuilder, GraphInput};
//! use digraph_dfs::config::{CheckConfig, RenderConfig};
//!
//! let check = CheckConfig::builder()
//!     .with_input(GraphInput::default())
//!     .with_format(OutputFormat::Human)
//!     .with_error_on_cycles(true)
//!     .with_show_timings(false)
//!     .with_max_components(None)
//!     .build()
//!     .unwrap();
//! assert!(check.error_on_cycles);
//!
//! let render = RenderConfig::builder()
//!     .with_input(GraphInput::default())
//!     .with_format(GraphFormat::Mermaid)
//!     .with_output(None)
//!     .with_highlight_components(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(render.format, GraphFormat::Mermaid);
//! ```

pub mod check;
pub mod render;

pub use check::CheckConfig;
pub use render::RenderConfig;
