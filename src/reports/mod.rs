//! Report generation modules for different output formats
//!
//! This module contains report generators for the analysis results:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::analyzer::Analysis;
use crate::error::DigraphError;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from an analysis result
    fn generate_report(&self, analysis: &Analysis) -> Result<String, DigraphError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
