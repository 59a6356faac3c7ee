use std::collections::{BTreeMap, HashMap};
use std::io::Write;

use miette::Result;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::types::{Component, Id};
use crate::error::DigraphError;

// Blue-Orange Accessible Palette - Soothing colors with excellent contrast
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(DigraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(DigraphError::from)
    };
}

/// Renders a graph as a diagram
///
/// Takes the petgraph export of a [`Graph`](super::Graph) together with its
/// strongly connected components. A component is highlighted when it holds a
/// cycle: more than one vertex, or a single vertex with a self-loop.
pub struct GraphRenderer {
    highlight_components: bool,
}

impl GraphRenderer {
    pub fn new(highlight_components: bool) -> Self {
        Self {
            highlight_components,
        }
    }

    pub fn render_dot(
        &self,
        graph: &DiGraph<Id, ()>,
        components: &[Component],
        output: &mut dyn Write,
    ) -> Result<()> {
        let membership = self.cyclic_membership(graph, components);

        writeln_out!(output, "digraph digraph_dfs {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in graph.node_indices() {
            let id = &graph[node];
            let (fill_color, stroke_color) = if membership.contains_key(id.as_str()) {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            } else {
                (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE)
            };

            writeln_out!(
                output,
                r#"    "{}" [style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                escape_dot(id),
                fill_color,
                stroke_color
            )?;
        }

        writeln_out!(output)?;

        for ((source, target), count) in self.edge_groups(graph) {
            let source_id = &graph[source];
            let target_id = &graph[target];
            let color = if self.same_component(&membership, source_id, target_id) {
                colors::CYCLE_EDGE
            } else {
                colors::NORMAL_EDGE
            };

            if count > 1 {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [label="x{}", color="{}", penwidth=2];"#,
                    escape_dot(source_id),
                    escape_dot(target_id),
                    count,
                    color
                )?;
            } else {
                writeln_out!(
                    output,
                    r#"    "{}" -> "{}" [color="{}", penwidth=2];"#,
                    escape_dot(source_id),
                    escape_dot(target_id),
                    color
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn render_mermaid(
        &self,
        graph: &DiGraph<Id, ()>,
        components: &[Component],
        output: &mut dyn Write,
    ) -> Result<()> {
        let membership = self.cyclic_membership(graph, components);

        writeln_out!(output, "graph TD")?;

        // Each cyclic component becomes a subgraph
        let mut grouped: BTreeMap<usize, Vec<NodeIndex>> = BTreeMap::new();
        let mut ungrouped = Vec::new();
        for node in graph.node_indices() {
            match membership.get(graph[node].as_str()) {
                Some(&component) => grouped.entry(component).or_default().push(node),
                None => ungrouped.push(node),
            }
        }

        for (component, nodes) in &grouped {
            writeln_out!(output)?;
            writeln_out!(
                output,
                "    subgraph scc_{}[\"component {}\"]",
                component,
                component + 1
            )?;
            for &node in nodes {
                let id = &graph[node];
                writeln_out!(
                    output,
                    "        {}((\"{}\"))",
                    mermaid_id(node),
                    escape_mermaid(id)
                )?;
                writeln_out!(
                    output,
                    "        style {} fill:{},stroke:{},stroke-width:3px",
                    mermaid_id(node),
                    colors::CYCLE_NODE_FILL,
                    colors::CYCLE_NODE_STROKE
                )?;
            }
            writeln_out!(output, "    end")?;
        }

        if !ungrouped.is_empty() {
            writeln_out!(output)?;
            for node in ungrouped {
                writeln_out!(
                    output,
                    "    {}[\"{}\"]",
                    mermaid_id(node),
                    escape_mermaid(&graph[node])
                )?;
                writeln_out!(
                    output,
                    "    style {} fill:{},stroke:{},stroke-width:2px",
                    mermaid_id(node),
                    colors::NORMAL_NODE_FILL,
                    colors::NORMAL_NODE_STROKE
                )?;
            }
        }

        writeln_out!(output)?;
        let mut link_index = 0;
        let mut cyclic_links = Vec::new();
        for ((source, target), count) in self.edge_groups(graph) {
            if count > 1 {
                writeln_out!(
                    output,
                    "    {} -->|x{}| {}",
                    mermaid_id(source),
                    count,
                    mermaid_id(target)
                )?;
            } else {
                writeln_out!(output, "    {} --> {}", mermaid_id(source), mermaid_id(target))?;
            }

            if self.same_component(&membership, &graph[source], &graph[target]) {
                cyclic_links.push(link_index);
            }
            link_index += 1;
        }

        for link in cyclic_links {
            writeln_out!(
                output,
                "    linkStyle {} stroke:{},stroke-width:3px",
                link,
                colors::CYCLE_EDGE
            )?;
        }

        Ok(())
    }

    /// Map each vertex of a cyclic component to that component's position
    fn cyclic_membership<'a>(
        &self,
        graph: &DiGraph<Id, ()>,
        components: &'a [Component],
    ) -> HashMap<&'a str, usize> {
        if !self.highlight_components {
            return HashMap::new();
        }

        let self_loops: Vec<&str> = graph
            .edge_references()
            .filter(|edge| edge.source() == edge.target())
            .map(|edge| graph[edge.source()].as_str())
            .collect();

        components
            .iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .members()
                        .first()
                        .is_some_and(|id| self_loops.contains(&id.as_str()))
            })
            .enumerate()
            .flat_map(|(position, component)| {
                component
                    .members()
                    .iter()
                    .map(move |id| (id.as_str(), position))
            })
            .collect()
    }

    fn same_component(&self, membership: &HashMap<&str, usize>, from: &str, to: &str) -> bool {
        match (membership.get(from), membership.get(to)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Parallel edges collapsed into one entry with a count, in first-seen
    /// order
    fn edge_groups(&self, graph: &DiGraph<Id, ()>) -> Vec<((NodeIndex, NodeIndex), usize)> {
        let mut groups: Vec<((NodeIndex, NodeIndex), usize)> = Vec::new();
        let mut positions: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();

        for edge in graph.edge_references() {
            let key = (edge.source(), edge.target());
            match positions.get(&key) {
                Some(&position) => groups[position].1 += 1,
                None => {
                    positions.insert(key, groups.len());
                    groups.push((key, 1));
                }
            }
        }

        groups
    }
}

fn escape_dot(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Mermaid labels cannot hold a raw double quote
fn escape_mermaid(id: &str) -> String {
    id.replace('"', "#quot;")
}

fn mermaid_id(node: NodeIndex) -> String {
    format!("v{}", node.index())
}
