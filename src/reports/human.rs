//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analyzer::{Analysis, Structure};
use crate::error::DigraphError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_components: Option<usize>,
    show_timings: bool,
}

impl HumanReportGenerator {
    pub fn new(max_components: Option<usize>, show_timings: bool) -> Self {
        Self {
            max_components,
            show_timings,
        }
    }

    fn write_summary(&self, output: &mut String, analysis: &Analysis) -> Result<(), DigraphError> {
        writeln!(
            output,
            "{} {} {}, {} {}",
            style("📊").blue(),
            style(analysis.vertex_count()).bold(),
            pluralize("vertex", analysis.vertex_count()),
            style(analysis.edge_count()).bold(),
            pluralize("edge", analysis.edge_count())
        )?;
        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, analysis: &Analysis) -> Result<String, DigraphError> {
        let mut output = String::new();
        writeln!(output)?;
        self.write_summary(&mut output, analysis)?;

        match analysis.structure() {
            Structure::Acyclic { order } => {
                writeln!(
                    output,
                    "\n{} No cycles detected! The graph is a DAG.\n",
                    style("✅").green().bold()
                )?;

                if order.is_empty() {
                    return Ok(output);
                }

                writeln!(output, "{} Topological order:", style("📋").cyan())?;
                let width = order.len().to_string().len();
                for (i, id) in order.iter().enumerate() {
                    writeln!(
                        output,
                        "  {:>width$}. {}",
                        style(i + 1).dim(),
                        style(id).bold(),
                        width = width
                    )?;
                }
            }
            Structure::Cyclic {
                back_edge,
                components,
                elapsed,
            } => {
                writeln!(
                    output,
                    "\n{} The graph contains at least one cycle.",
                    style("❌").red().bold()
                )?;
                if let Some((from, to)) = back_edge {
                    writeln!(
                        output,
                        "  {} First back edge: {} → {}",
                        style("↩").yellow(),
                        style(from).yellow(),
                        style(to).yellow()
                    )?;
                }

                let grouped = analysis.multi_vertex_components().count();
                writeln!(
                    output,
                    "\n{} Found {} strongly connected {} ({} with more than one vertex):\n",
                    style("🔗").cyan(),
                    style(components.len()).red().bold(),
                    pluralize("component", components.len()),
                    style(grouped).red().bold()
                )?;

                let shown = self
                    .max_components
                    .map_or(components.len(), |limit| limit.min(components.len()));

                for (i, component) in components.iter().take(shown).enumerate() {
                    writeln!(
                        output,
                        "{} Component #{} ({} {})",
                        style("🔄").yellow(),
                        i + 1,
                        component.len(),
                        pluralize("vertex", component.len())
                    )?;
                    for id in component.sorted_members() {
                        writeln!(output, "    {} {}", style("•").dim(), style(id).bold())?;
                    }
                }

                if shown < components.len() {
                    writeln!(
                        output,
                        "\n{} Showing {} of {} components. Use --max-components to see more.",
                        style("ℹ️").blue(),
                        style(shown).yellow(),
                        style(components.len()).yellow()
                    )?;
                }

                if self.show_timings {
                    writeln!(
                        output,
                        "\n{} Component pass took {:.3} ms",
                        style("⏱").dim(),
                        elapsed.as_secs_f64() * 1000.0
                    )?;
                }
            }
        }

        Ok(output)
    }
}
