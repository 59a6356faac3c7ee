//! # Graph Construction and Rendering Module
//!
//! This module provides the directed graph that every structural query runs
//! on, and renderers that turn it into diagrams.
//!
//! ## Components
//!
//! ### Graph
//! - **Graph**: Ordered vertices keyed by string ids, with outgoing adjacency
//!   lists, transposition and the cycle / ordering / component queries
//! - **Vertex**: A vertex id and the ids of its direct successors
//! - **Component**: One strongly connected component
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders graphs as Graphviz DOT or Mermaid, optionally
//!   highlighting vertices that share a non-trivial component
//!
//! ## Example
//!
//! ```
//! use digraph_dfs::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::from_ids(["1", "2", "3", "4"])?;
//! graph.add_edge("1", "2")?;
//! graph.add_edge("1", "3")?;
//! graph.add_edge("2", "4")?;
//! graph.add_edge("3", "4")?;
//!
//! assert!(!graph.is_cyclic());
//!
//! let order: Vec<&str> = graph.topological_sort()?.iter().map(|v| v.id()).collect();
//! assert_eq!(order.first(), Some(&"1"));
//! assert_eq!(order.last(), Some(&"4"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Output Formats
//!
//! - **DOT**: Graphviz format for detailed visualization
//! - **Mermaid**: Markdown-compatible diagrams for documentation

mod graph_impl;
mod renderer;
mod types;

pub use graph_impl::Graph;
pub use renderer::GraphRenderer;
pub use types::{Component, Id, TimedComponents, Vertex};
