//! # Graph Analysis Module
//!
//! This module runs the complete structural analysis of a graph: a cycle
//! check, followed by a topological order for acyclic graphs or a
//! strongly connected component decomposition for cyclic ones.
//!
//! ## Key Components
//!
//! - **GraphAnalyzer**: Drives the depth-first passes over a [`Graph`]
//! - **Analysis**: The outcome, consumed by the report generators
//! - **Structure**: Acyclic (with its order) or cyclic (with its components)
//!
//! ## Example
//!
//! ```
//! use digraph_dfs::analyzer::GraphAnalyzer;
//! use digraph_dfs::graph::Graph;
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = Graph::from_ids(["X", "Y", "Z"])?;
//! graph.add_edge("X", "Y")?;
//! graph.add_edge("Y", "Z")?;
//! graph.add_edge("Z", "X")?;
//!
//! let analysis = GraphAnalyzer::new().analyze(&mut graph, None)?;
//!
//! assert!(analysis.is_cyclic());
//! assert_eq!(analysis.components().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`Graph`]: crate::graph::Graph

mod analyzer_impl;

pub use analyzer_impl::*;
