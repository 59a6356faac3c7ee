//! Core graph types
//!
//! This module contains the fundamental data structures used by the graph and
//! the results of its structural queries.

use std::time::Duration;

use serde::Serialize;

/// Opaque vertex key, unique within a graph
pub type Id = String;

/// A vertex and the ids of its direct successors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    pub(crate) id: Id,
    pub(crate) adjacency: Vec<Id>,
}

impl Vertex {
    pub(crate) fn new(id: Id) -> Self {
        Self {
            id,
            adjacency: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Successor ids in insertion order, duplicates included
    pub fn adjacency(&self) -> &[Id] {
        &self.adjacency
    }

    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// A strongly connected component
///
/// Members are listed in the order the second depth-first pass discovered
/// them; the first member is the component's seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Component {
    members: Vec<Id>,
}

impl Component {
    pub(crate) fn new(members: Vec<Id>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[Id] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }

    /// Members sorted by id, for stable display
    pub fn sorted_members(&self) -> Vec<&str> {
        let mut members: Vec<&str> = self.members.iter().map(String::as_str).collect();
        members.sort_unstable();
        members
    }
}

/// Components together with the wall-clock cost of the second pass
#[derive(Debug, Clone)]
pub struct TimedComponents {
    pub components: Vec<Component>,
    pub elapsed: Duration,
}
