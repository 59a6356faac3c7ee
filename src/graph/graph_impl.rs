use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::types::{Component, Id, TimedComponents, Vertex};
use crate::dfs::{self, DepthFirstSearch, GraphView};
use crate::error::{DigraphError, VertexRef};
use crate::utils::time::saturating_micros;

const STALE_SEARCH: &str = "no cycle check has run since the graph last changed";

/// A directed graph keyed by string ids
///
/// Vertices live in insertion order and their position is their internal
/// index. Every id that appears in an adjacency list names an existing
/// vertex. The result of the last [`is_cyclic`](Self::is_cyclic) call is
/// kept until the graph is mutated again.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<Id, usize>,
    edge_count: usize,
    search: Option<DepthFirstSearch>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with the given vertices and no edges
    pub fn from_ids<I, S>(ids: I) -> Result<Self, DigraphError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Id>,
    {
        let mut graph = Self::new();
        for id in ids {
            graph.add_vertex(id)?;
        }
        Ok(graph)
    }

    /// Append a vertex with no outgoing edges and return its position
    pub fn add_vertex(&mut self, id: impl Into<Id>) -> Result<usize, DigraphError> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(DigraphError::DuplicateVertex { id });
        }

        let position = self.vertices.len();
        self.index.insert(id.clone(), position);
        self.vertices.push(Vertex::new(id));
        self.search = None;
        Ok(position)
    }

    /// Add a directed edge `from -> to` between two existing vertices
    ///
    /// Self-loops and repeated edges are accepted; every call counts as one
    /// edge.
    pub fn add_edge(&mut self, from: &str, to: &str) -> Result<(), DigraphError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.push_edge(from, to);
        self.search = None;
        Ok(())
    }

    /// Add a directed edge between the vertices at positions `a` and `b`
    pub fn add_edge_at(&mut self, a: usize, b: usize) -> Result<(), DigraphError> {
        self.check_position(a)?;
        self.check_position(b)?;
        self.push_edge(a, b);
        self.search = None;
        Ok(())
    }

    /// Whether at least one edge goes from position `a` to position `b`
    pub fn exist_edge(&self, a: usize, b: usize) -> Result<bool, DigraphError> {
        self.check_position(a)?;
        self.check_position(b)?;
        let target = &self.vertices[b].id;
        Ok(self.vertices[a].adjacency.contains(target))
    }

    /// Whether at least one edge goes from `from` to `to`
    pub fn contains_edge(&self, from: &str, to: &str) -> Result<bool, DigraphError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        self.exist_edge(from, to)
    }

    /// Run the first depth-first pass and report whether a cycle exists
    ///
    /// The traversal always starts from scratch, so the answer reflects the
    /// current edge set. Its result seeds
    /// [`topological_sort`](Self::topological_sort) and
    /// [`strongly_connected_components`](Self::strongly_connected_components).
    pub fn is_cyclic(&mut self) -> bool {
        let search = DepthFirstSearch::run(&*self);
        let cyclic = search.has_cycle();
        self.search = Some(search);
        cyclic
    }

    /// Vertices in topological order
    ///
    /// Requires a prior [`is_cyclic`](Self::is_cyclic) call that returned
    /// `false` on the unchanged graph.
    pub fn topological_sort(&self) -> Result<Vec<&Vertex>, DigraphError> {
        let search = self.current_search("topological order")?;
        if search.has_cycle() {
            return Err(DigraphError::PreconditionViolated {
                operation: "topological order",
                requirement: "the graph contains a cycle",
            });
        }

        Ok(search
            .finish_order()
            .iter()
            .map(|&position| &self.vertices[position])
            .collect())
    }

    /// Build a new graph with the same vertices, in the same order, and
    /// every edge reversed
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph {
            vertices: self
                .vertices
                .iter()
                .map(|vertex| Vertex::new(vertex.id.clone()))
                .collect(),
            index: self.index.clone(),
            edge_count: 0,
            search: None,
        };

        for (from, vertex) in self.vertices.iter().enumerate() {
            for to in vertex.adjacency.iter().filter_map(|id| self.index.get(id)) {
                transposed.push_edge(*to, from);
            }
        }

        transposed
    }

    /// Partition the vertices into strongly connected components
    ///
    /// Requires a prior [`is_cyclic`](Self::is_cyclic) call on the unchanged
    /// graph. Works on acyclic graphs too, where every component is a
    /// singleton.
    pub fn strongly_connected_components(&self) -> Result<Vec<Component>, DigraphError> {
        Ok(self.strongly_connected_components_timed()?.components)
    }

    /// Like [`strongly_connected_components`](Self::strongly_connected_components),
    /// also reporting how long the second pass took
    pub fn strongly_connected_components_timed(&self) -> Result<TimedComponents, DigraphError> {
        let search = self.current_search("strongly connected components")?;
        let transposed = self.transpose();

        let started = Instant::now();
        let partition = dfs::collect_components(&transposed, search.finish_order());
        let elapsed = started.elapsed();

        let components: Vec<Component> = partition
            .into_iter()
            .map(|members| {
                Component::new(
                    members
                        .into_iter()
                        .map(|position| self.vertices[position].id.clone())
                        .collect(),
                )
            })
            .collect();

        debug!(
            components = components.len(),
            elapsed_us = saturating_micros(elapsed),
            "strongly connected components computed"
        );

        Ok(TimedComponents {
            components,
            elapsed,
        })
    }

    /// The first back edge found by the last cycle check, if it is still
    /// current
    pub fn back_edge(&self) -> Option<(&str, &str)> {
        let (from, to) = self.search.as_ref()?.back_edge()?;
        Some((self.vertices[from].id(), self.vertices[to].id()))
    }

    /// Number of vertices
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, repeated edges included
    pub fn edges(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.index_of(id).map(|position| &self.vertices[position])
    }

    pub fn vertex_at(&self, position: usize) -> Option<&Vertex> {
        self.vertices.get(position)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Export to a petgraph graph with the same vertex order and edge
    /// multiset
    pub fn to_petgraph(&self) -> DiGraph<Id, ()> {
        let mut graph = DiGraph::with_capacity(self.vertices.len(), self.edge_count);
        let nodes: Vec<NodeIndex> = self
            .vertices
            .iter()
            .map(|vertex| graph.add_node(vertex.id.clone()))
            .collect();

        for (from, vertex) in self.vertices.iter().enumerate() {
            for to in vertex.adjacency.iter().filter_map(|id| self.index.get(id)) {
                graph.add_edge(nodes[from], nodes[*to], ());
            }
        }

        graph
    }

    fn current_search(&self, operation: &'static str) -> Result<&DepthFirstSearch, DigraphError> {
        self.search
            .as_ref()
            .ok_or(DigraphError::PreconditionViolated {
                operation,
                requirement: STALE_SEARCH,
            })
    }

    fn resolve(&self, id: &str) -> Result<usize, DigraphError> {
        self.index_of(id).ok_or_else(|| DigraphError::UnknownVertex {
            vertex: VertexRef::from(id),
        })
    }

    fn check_position(&self, position: usize) -> Result<(), DigraphError> {
        if position < self.vertices.len() {
            Ok(())
        } else {
            Err(DigraphError::UnknownVertex {
                vertex: VertexRef::from(position),
            })
        }
    }

    fn push_edge(&mut self, from: usize, to: usize) {
        let target = self.vertices[to].id.clone();
        self.vertices[from].adjacency.push(target);
        self.edge_count += 1;
    }
}

impl GraphView for Graph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[index]
            .adjacency
            .iter()
            .filter_map(|id| self.index.get(id).copied())
    }
}

/// Adjacency dump, one `id --> successors` line per vertex
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{} --> ", vertex.id)?;
            for successor in &vertex.adjacency {
                write!(f, "{successor} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
