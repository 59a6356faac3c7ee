//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} diagram...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let mut graph = config
            .input
            .build_graph()
            .wrap_err("Failed to build graph from input")?;

        // Components are only needed for highlighting
        let components = if config.highlight_components {
            graph.is_cyclic();
            graph
                .strongly_connected_components()
                .wrap_err("Failed to compute strongly connected components")?
        } else {
            Vec::new()
        };

        let renderer = GraphRenderer::new(config.highlight_components);
        let exported = graph.to_petgraph();

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        match config.format {
            GraphFormat::Dot => renderer
                .render_dot(&exported, &components, output_writer.as_mut())
                .wrap_err("Failed to render DOT graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&exported, &components, output_writer.as_mut())
                .wrap_err("Failed to render Mermaid graph")?,
        }

        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush diagram output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::{ConfigBuilder, EdgeSpec, GraphInput};

    #[test]
    fn test_render_writes_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("graph.dot");

        let config = RenderConfig::builder()
            .with_input(GraphInput {
                vertices: vec![],
                edges: vec![
                    EdgeSpec {
                        from: "a".to_string(),
                        to: "b".to_string(),
                    },
                    EdgeSpec {
                        from: "b".to_string(),
                        to: "a".to_string(),
                    },
                ],
            })
            .with_format(GraphFormat::Dot)
            .with_output(Some(path.clone()))
            .with_highlight_components(true)
            .build()
            .unwrap();

        RenderExecutor::execute(config).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("digraph digraph_dfs {"));
        assert!(written.contains(r#""a" -> "b""#));
        assert!(written.contains(r#""b" -> "a""#));
    }
}
