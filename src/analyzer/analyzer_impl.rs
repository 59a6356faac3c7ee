use std::time::Duration;

use miette::{Result, WrapErr};
use tracing::info;

use crate::graph::{Component, Graph, Id};
use crate::progress::ProgressReporter;

/// What the analysis found out about a graph's structure
#[derive(Debug, Clone)]
pub enum Structure {
    /// No cycle: every vertex in topological order
    Acyclic { order: Vec<Id> },
    /// At least one cycle: the strongly connected components, the first back
    /// edge met and the time spent in the second pass
    Cyclic {
        back_edge: Option<(Id, Id)>,
        components: Vec<Component>,
        elapsed: Duration,
    },
}

/// Result of analyzing one graph
#[derive(Debug, Clone)]
pub struct Analysis {
    vertex_count: usize,
    edge_count: usize,
    structure: Structure,
}

impl Analysis {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn is_cyclic(&self) -> bool {
        matches!(self.structure, Structure::Cyclic { .. })
    }

    /// The topological order, if the graph is acyclic
    pub fn topological_order(&self) -> Option<&[Id]> {
        match &self.structure {
            Structure::Acyclic { order } => Some(order),
            Structure::Cyclic { .. } => None,
        }
    }

    /// The strongly connected components, empty if the graph is acyclic
    pub fn components(&self) -> &[Component] {
        match &self.structure {
            Structure::Acyclic { .. } => &[],
            Structure::Cyclic { components, .. } => components,
        }
    }

    /// Components holding more than one vertex
    pub fn multi_vertex_components(&self) -> impl Iterator<Item = &Component> {
        self.components()
            .iter()
            .filter(|component| component.len() > 1)
    }

    pub fn back_edge(&self) -> Option<(&str, &str)> {
        match &self.structure {
            Structure::Cyclic {
                back_edge: Some((from, to)),
                ..
            } => Some((from.as_str(), to.as_str())),
            _ => None,
        }
    }

    /// Time spent in the second depth-first pass, if one ran
    pub fn elapsed(&self) -> Option<Duration> {
        match &self.structure {
            Structure::Acyclic { .. } => None,
            Structure::Cyclic { elapsed, .. } => Some(*elapsed),
        }
    }
}

/// Runs the standard analysis of a graph
///
/// First checks the graph for cycles. An acyclic graph is then reported with
/// its topological order; a cyclic one with its strongly connected
/// components.
#[derive(Debug, Default)]
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(
        &self,
        graph: &mut Graph,
        progress: Option<&mut ProgressReporter>,
    ) -> Result<Analysis> {
        let mut progress = progress;

        if let Some(p) = progress.as_deref_mut() {
            p.start_cycle_check(graph.size(), graph.edges());
        }
        let cyclic = graph.is_cyclic();
        if let Some(p) = progress.as_deref_mut() {
            p.finish_cycle_check(cyclic);
        }

        let structure = if cyclic {
            if let Some(p) = progress.as_deref_mut() {
                p.start_components();
            }
            let timed = graph
                .strongly_connected_components_timed()
                .wrap_err("Failed to compute strongly connected components")?;
            if let Some(p) = progress.as_deref_mut() {
                p.finish_components(timed.components.len());
            }

            Structure::Cyclic {
                back_edge: graph
                    .back_edge()
                    .map(|(from, to)| (from.to_string(), to.to_string())),
                components: timed.components,
                elapsed: timed.elapsed,
            }
        } else {
            let order = graph
                .topological_sort()
                .wrap_err("Failed to compute topological order")?
                .into_iter()
                .map(|vertex| vertex.id().to_string())
                .collect();
            Structure::Acyclic { order }
        };

        info!(
            vertices = graph.size(),
            edges = graph.edges(),
            cyclic,
            "graph analyzed"
        );

        Ok(Analysis {
            vertex_count: graph.size(),
            edge_count: graph.edges(),
            structure,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_acyclic_graph_reports_order() {
        let mut graph = Graph::from_ids(["A", "B", "C"]).unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "C").unwrap();

        let analysis = GraphAnalyzer::new().analyze(&mut graph, None).unwrap();

        assert!(!analysis.is_cyclic());
        assert_eq!(
            analysis.topological_order().unwrap(),
            &["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert!(analysis.components().is_empty());
        assert_eq!(analysis.elapsed(), None);
        assert_eq!(analysis.back_edge(), None);
    }

    #[test]
    fn test_cyclic_graph_reports_components() {
        let mut graph = Graph::from_ids(["A", "B", "C", "D"]).unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();
        graph.add_edge("B", "C").unwrap();
        graph.add_edge("C", "D").unwrap();

        let analysis = GraphAnalyzer::new().analyze(&mut graph, None).unwrap();

        assert!(analysis.is_cyclic());
        assert_eq!(analysis.topological_order(), None);
        assert_eq!(analysis.components().len(), 3);
        assert_eq!(analysis.multi_vertex_components().count(), 1);
        assert_eq!(analysis.back_edge(), Some(("B", "A")));
        assert!(analysis.elapsed().is_some());
        assert_eq!(analysis.vertex_count(), 4);
        assert_eq!(analysis.edge_count(), 4);
    }

    #[test]
    fn test_empty_graph_is_acyclic() {
        let mut graph = Graph::new();

        let analysis = GraphAnalyzer::new().analyze(&mut graph, None).unwrap();

        assert!(!analysis.is_cyclic());
        assert_eq!(analysis.topological_order(), Some(&[][..]));
    }
}
