//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analyzer::{Analysis, GraphAnalyzer};
use crate::cli::OutputFormat;
use crate::config::CheckConfig;
use crate::executors::CommandExecutor;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Checking graph structure...", style("🔍").cyan());

        // Spinners only make sense on an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let (analysis, report) = analyze_and_report(&config, progress.as_mut())?;
        print!("{report}");

        // Exit with error code if a cycle was found and requested
        if config.error_on_cycles && analysis.is_cyclic() {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Build the graph, analyze it and render the report in the configured
/// format
///
/// An empty graph still produces a full report.
fn analyze_and_report(
    config: &CheckConfig,
    progress: Option<&mut ProgressReporter>,
) -> Result<(Analysis, String)> {
    let mut graph = config
        .input
        .build_graph()
        .wrap_err("Failed to build graph from input")?;

    if graph.is_empty() {
        eprintln!("{} No vertices given to analyze", style("ℹ").blue());
    }

    let analysis = GraphAnalyzer::new()
        .analyze(&mut graph, progress)
        .wrap_err("Failed to analyze graph")?;

    let report = match config.format {
        OutputFormat::Human => {
            HumanReportGenerator::new(config.max_components, config.show_timings)
                .generate_report(&analysis)
        }
        OutputFormat::Json => {
            JsonReportGenerator::new(config.show_timings).generate_report(&analysis)
        }
    }
    .into_diagnostic()
    .wrap_err("Failed to generate report")?;

    Ok((analysis, report))
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::common::{ConfigBuilder, EdgeSpec, GraphInput};

    fn config(input: GraphInput, format: OutputFormat) -> CheckConfig {
        CheckConfig::builder()
            .with_input(input)
            .with_format(format)
            .with_error_on_cycles(false)
            .with_show_timings(false)
            .with_max_components(None)
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_graph_still_reports_json() {
        let (analysis, report) =
            analyze_and_report(&config(GraphInput::default(), OutputFormat::Json), None).unwrap();

        assert!(!analysis.is_cyclic());
        let json: Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["vertex_count"], 0);
        assert_eq!(json["edge_count"], 0);
        assert_eq!(json["cyclic"], false);
        assert_eq!(json["topological_order"], json!([]));
        assert_eq!(json["components"], json!([]));
    }

    #[test]
    fn test_empty_graph_still_reports_human() {
        let (_, report) =
            analyze_and_report(&config(GraphInput::default(), OutputFormat::Human), None)
                .unwrap();

        let report = console::strip_ansi_codes(&report).to_string();
        assert!(report.contains("0 vertices, 0 edges"));
        assert!(report.contains("No cycles detected"));
    }

    #[test]
    fn test_cyclic_input_reports_components() {
        let input = GraphInput {
            vertices: vec![],
            edges: vec![
                EdgeSpec {
                    from: "x".to_string(),
                    to: "y".to_string(),
                },
                EdgeSpec {
                    from: "y".to_string(),
                    to: "x".to_string(),
                },
            ],
        };

        let (analysis, report) =
            analyze_and_report(&config(input, OutputFormat::Json), None).unwrap();

        assert!(analysis.is_cyclic());
        let json: Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["back_edge"], json!({"from": "y", "to": "x"}));
    }
}
