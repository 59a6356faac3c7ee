//! # Depth-First Traversal Engine
//!
//! This module implements the two depth-first passes used to analyze a
//! directed graph.
//!
//! ## Algorithm
//!
//! The first pass ([`DepthFirstSearch`]) colors every vertex with a
//! three-state [`Mark`]. An edge that reaches a vertex which is still
//! [`Mark::InProgress`] is a back edge, which is exactly the evidence of a
//! directed cycle. Vertices are collected in decreasing finish-time order,
//! which is a topological order whenever no back edge was found.
//!
//! The second pass ([`collect_components`]) runs over the transposed graph,
//! taking roots in the first pass's decreasing finish-time order. Each tree
//! it grows is one strongly connected component (Kosaraju's algorithm).
//!
//! Both passes keep an explicit stack of `(vertex, successors)` frames, so
//! traversal depth is bounded by heap memory rather than the call stack.
//!
//! ## Example
//!
//! ```
//! use digraph_dfs::dfs::{DepthFirstSearch, collect_components};
//! use digraph_dfs::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = Graph::from_ids(["a", "b", "c"])?;
//! graph.add_edge("a", "b")?;
//! graph.add_edge("b", "a")?;
//! graph.add_edge("b", "c")?;
//!
//! let search = DepthFirstSearch::run(&graph);
//! assert!(search.has_cycle());
//!
//! let components = collect_components(&graph.transpose(), search.finish_order());
//! assert_eq!(components.len(), 2);
//! # Ok(())
//! # }
//! ```

mod components;
mod search;

pub use components::collect_components;
pub use search::DepthFirstSearch;

/// Read-only view of a directed graph as consumed by the traversal engine
///
/// Vertices are addressed by dense positions `0..vertex_count()`.
pub trait GraphView {
    /// Number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Positions of the direct successors of `index`, in adjacency order
    fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_;
}

/// Visitation state of a vertex during a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Unvisited,
    InProgress,
    Finished,
}
