//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::analyzer::Analysis;
use crate::error::DigraphError;
use crate::graph::{Component, Id};
use crate::utils::time::saturating_micros;

#[derive(Serialize)]
struct BackEdge<'a> {
    from: &'a str,
    to: &'a str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    vertex_count: usize,
    edge_count: usize,
    cyclic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    topological_order: Option<&'a [Id]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    back_edge: Option<BackEdge<'a>>,
    components: Vec<&'a Component>,
    #[serde(skip_serializing_if = "Option::is_none")]
    component_pass_micros: Option<u64>,
}

pub struct JsonReportGenerator {
    include_timings: bool,
}

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl JsonReportGenerator {
    pub fn new(include_timings: bool) -> Self {
        Self { include_timings }
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analysis: &Analysis) -> Result<String, DigraphError> {
        let report = JsonReport {
            vertex_count: analysis.vertex_count(),
            edge_count: analysis.edge_count(),
            cyclic: analysis.is_cyclic(),
            topological_order: analysis.topological_order(),
            back_edge: analysis
                .back_edge()
                .map(|(from, to)| BackEdge { from, to }),
            components: analysis.components().iter().collect(),
            component_pass_micros: if self.include_timings {
                analysis.elapsed().map(saturating_micros)
            } else {
                None
            },
        };

        serde_json::to_string_pretty(&report).map_err(DigraphError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::analyzer::GraphAnalyzer;
    use crate::graph::Graph;

    fn analyze(ids: &[&str], edges: &[(&str, &str)]) -> Analysis {
        let mut graph = Graph::from_ids(ids.iter().copied()).unwrap();
        for (from, to) in edges {
            graph.add_edge(from, to).unwrap();
        }
        GraphAnalyzer::new().analyze(&mut graph, None).unwrap()
    }

    #[test]
    fn test_json_report_acyclic() {
        let analysis = analyze(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);

        let report = JsonReportGenerator::default()
            .generate_report(&analysis)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["cyclic"], false);
        assert_eq!(json["vertex_count"], 3);
        assert_eq!(json["edge_count"], 2);
        assert_eq!(json["topological_order"], json!(["A", "B", "C"]));
        assert_eq!(json["components"], json!([]));
        assert!(json.get("back_edge").is_none());
    }

    #[test]
    fn test_json_report_cyclic() {
        let analysis = analyze(&["X", "Y", "Z"], &[("X", "Y"), ("Y", "Z"), ("Z", "X")]);

        let report = JsonReportGenerator::default()
            .generate_report(&analysis)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["cyclic"], true);
        assert!(json.get("topological_order").is_none());
        assert_eq!(json["back_edge"], json!({"from": "Z", "to": "X"}));
        assert_eq!(json["components"].as_array().unwrap().len(), 1);
        assert_eq!(json["components"][0].as_array().unwrap().len(), 3);
        assert!(json.get("component_pass_micros").is_none());
    }

    #[test]
    fn test_json_report_timings() {
        let analysis = analyze(&["a"], &[("a", "a")]);

        let report = JsonReportGenerator::new(true)
            .generate_report(&analysis)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert!(json["component_pass_micros"].is_u64());
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let analysis = analyze(&["a"], &[]);

        let report = JsonReportGenerator::default()
            .generate_report(&analysis)
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
