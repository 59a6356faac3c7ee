//! # digraph-dfs - Cycles, Topological Order and Strongly Connected Components
//!
//! digraph-dfs is a small directed-graph library built around a two-pass
//! depth-first search. The first pass over the graph classifies every
//! vertex as unvisited, in progress or finished. An edge into an in-progress
//! vertex proves a cycle, and the decreasing finish-time order is a
//! topological order when there is none. The second pass walks the
//! transposed graph in that order and collects strongly connected
//! components (Kosaraju's algorithm).
//!
//! ## Main Components
//!
//! - **Graph**: Ordered vertices keyed by string ids with outgoing adjacency
//!   lists, and the cycle / ordering / component queries
//! - **Dfs**: The iterative traversals both passes run on
//! - **Analyzer**: Runs the passes in order and packages the result
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Checking a Graph for Cycles
//!
//! ```
//! use digraph_dfs::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::from_ids(["X", "Y", "Z"])?;
//! graph.add_edge("X", "Y")?;
//! graph.add_edge("Y", "Z")?;
//! graph.add_edge("Z", "X")?;
//!
//! assert!(graph.is_cyclic());
//! assert_eq!(graph.back_edge(), Some(("Z", "X")));
//!
//! // Topological order only exists without cycles
//! assert!(graph.topological_sort().is_err());
//!
//! let components = graph.strongly_connected_components()?;
//! assert_eq!(components.len(), 1);
//! assert_eq!(components[0].sorted_members(), vec!["X", "Y", "Z"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### Generating a Report
//!
//! ```
//! use digraph_dfs::analyzer::GraphAnalyzer;
//! use digraph_dfs::graph::Graph;
//! use digraph_dfs::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = Graph::from_ids(["1", "2", "3", "4"])?;
//! graph.add_edge("1", "2")?;
//! graph.add_edge("1", "3")?;
//! graph.add_edge("2", "4")?;
//! graph.add_edge("3", "4")?;
//!
//! let analysis = GraphAnalyzer::new().analyze(&mut graph, None)?;
//! assert!(!analysis.is_cyclic());
//!
//! let report = JsonReportGenerator::default().generate_report(&analysis)?;
//! assert!(report.contains("\"topological_order\""));
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a Diagram
//!
//! ```
//! use digraph_dfs::graph::{Graph, GraphRenderer};
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = Graph::from_ids(["a", "b"])?;
//! graph.add_edge("a", "b")?;
//! graph.add_edge("b", "a")?;
//! graph.is_cyclic();
//! let components = graph.strongly_connected_components()?;
//!
//! let mut mermaid = Vec::new();
//! GraphRenderer::new(true).render_mermaid(&graph.to_petgraph(), &components, &mut mermaid)?;
//! assert!(String::from_utf8_lossy(&mermaid).starts_with("graph TD"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod logging;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod dfs;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

pub use common::ConfigBuilder;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    execute_command(cli.command)
}
