//! Check command configuration

use crate::cli::OutputFormat;
use crate::common::GraphInput;
use crate::error::DigraphError;

/// Configuration for the check command
///
/// This struct contains all options for analyzing a graph and reporting its
/// structure.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Vertices and edges of the graph to analyze
    pub input: GraphInput,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if the graph has a cycle
    pub error_on_cycles: bool,
    /// Whether to report the time spent collecting components
    pub show_timings: bool,
    /// Maximum number of components to report (None = all)
    pub max_components: Option<usize>,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    input: Option<GraphInput>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    show_timings: Option<bool>,
    max_components: Option<Option<usize>>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: GraphInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_show_timings(mut self, show_timings: bool) -> Self {
        self.show_timings = Some(show_timings);
        self
    }

    pub fn with_max_components(mut self, max_components: Option<usize>) -> Self {
        self.max_components = Some(max_components);
        self
    }
}

fn missing(field: &str) -> DigraphError {
    DigraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, DigraphError> {
        Ok(CheckConfig {
            input: self.input.ok_or_else(|| missing("input"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            error_on_cycles: self
                .error_on_cycles
                .ok_or_else(|| missing("error_on_cycles"))?,
            show_timings: self.show_timings.ok_or_else(|| missing("show_timings"))?,
            max_components: self
                .max_components
                .ok_or_else(|| missing("max_components"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_missing_field_is_reported() {
        let err = CheckConfig::builder()
            .with_input(GraphInput::default())
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }

    #[test]
    fn test_max_components_must_be_set_explicitly() {
        let err = CheckConfig::builder()
            .with_input(GraphInput::default())
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(false)
            .with_show_timings(false)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("max_components"));
    }
}
