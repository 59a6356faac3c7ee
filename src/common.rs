//! Common functionality shared across commands

use std::str::FromStr;

use clap::Args;
use tracing::debug;

use crate::constants::input::EDGE_SEPARATOR;
use crate::error::DigraphError;
use crate::graph::Graph;

/// A directed edge given on the command line as `FROM:TO`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

impl FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(EDGE_SEPARATOR)
            .ok_or_else(|| format!("expected FROM{EDGE_SEPARATOR}TO, got '{s}'"))?;
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(format!("edge '{s}' has an empty endpoint"));
        }
        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

/// Graph description arguments shared by multiple commands
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Vertex ids, in insertion order (vertices only named by edges are
    /// appended after these). Ids given here cannot contain ','
    /// and ids used in edges cannot contain ':'; build the graph through the
    /// library for arbitrary ids
    #[arg(
        long = "vertex",
        value_name = "ID",
        value_delimiter = ',',
        env = "DIGRAPH_DFS_VERTICES"
    )]
    pub vertices: Vec<String>,

    /// Directed edges, in insertion order. Endpoints cannot contain ':' or
    /// ','
    #[arg(
        short,
        long = "edge",
        value_name = "FROM:TO",
        value_delimiter = ',',
        env = "DIGRAPH_DFS_EDGES"
    )]
    pub edges: Vec<EdgeSpec>,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "DIGRAPH_DFS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common component display arguments
#[derive(Args, Debug, Clone)]
pub struct ComponentDisplayArgs {
    /// Maximum number of components to display (shows all by default)
    #[arg(long, env = "DIGRAPH_DFS_MAX_COMPONENTS")]
    pub max_components: Option<usize>,
}

/// The vertices and edges a command should build its graph from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphInput {
    pub vertices: Vec<String>,
    pub edges: Vec<EdgeSpec>,
}

impl From<GraphArgs> for GraphInput {
    fn from(args: GraphArgs) -> Self {
        Self {
            vertices: args.vertices,
            edges: args.edges,
        }
    }
}

impl GraphInput {
    /// Build the graph
    ///
    /// Declared vertices come first, in order; a repeated declaration is an
    /// error. Vertices that only appear in edges are appended in order of
    /// first appearance.
    pub fn build_graph(&self) -> Result<Graph, DigraphError> {
        let mut graph = Graph::from_ids(self.vertices.iter().cloned())?;

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if graph.index_of(endpoint).is_none() {
                    graph.add_vertex(endpoint.clone())?;
                }
            }
        }

        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to)?;
        }

        debug!(
            vertices = graph.size(),
            edges = graph.edges(),
            "graph built from input"
        );

        Ok(graph)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, DigraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, DigraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DigraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
