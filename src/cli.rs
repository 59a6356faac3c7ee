use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{ComponentDisplayArgs, FormatArgs, GraphArgs};

#[derive(Parser)]
#[command(
    name = "digraph-dfs",
    about = "Detect cycles, order DAGs and split directed graphs into strongly connected components",
    long_about = "digraph-dfs runs a depth-first search over a directed graph given as vertices \
                  and edges. Acyclic graphs are reported in topological order; cyclic graphs are \
                  split into strongly connected components with Kosaraju's two-pass algorithm.",
    version
)]
pub struct Cli {
    /// Log debug output from the graph passes (RUST_LOG takes precedence)
    #[arg(short, long, global = true, env = "DIGRAPH_DFS_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a graph for cycles and report its structure
    ///
    /// Runs the first depth-first pass to classify the graph. An acyclic
    /// graph is listed in topological order, a cyclic one is split into its
    /// strongly connected components.
    #[command(
        long_about = "Check a directed graph for cycles. The first depth-first pass marks every \
                      vertex unvisited, in progress or finished; an edge into an in-progress \
                      vertex proves a cycle. Without cycles, the decreasing finish-time order is \
                      printed as the topological order. With cycles, a second pass over the \
                      transposed graph collects the strongly connected components."
    )]
    Check {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        component_display: ComponentDisplayArgs,

        /// Exit with error code if the graph has a cycle
        #[arg(long, env = "DIGRAPH_DFS_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Report the time spent collecting components
        #[arg(long, env = "DIGRAPH_DFS_TIMINGS")]
        timings: bool,
    },

    /// Render a graph as a diagram
    ///
    /// Writes the graph as Graphviz DOT or Mermaid, with the vertices of each
    /// cycle grouped and highlighted.
    #[command(
        long_about = "Render a directed graph as a Graphviz DOT or Mermaid diagram. Vertices that \
                      share a strongly connected component with a cycle are highlighted, as are \
                      the edges between them."
    )]
    Render {
        #[command(flatten)]
        graph: GraphArgs,

        /// Diagram format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "DIGRAPH_DFS_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DIGRAPH_DFS_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight strongly connected components that contain a cycle
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            env = "DIGRAPH_DFS_HIGHLIGHT_COMPONENTS"
        )]
        highlight_components: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
}
