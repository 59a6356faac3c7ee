//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::GraphInput;
use crate::error::DigraphError;

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub input: GraphInput,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub highlight_components: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    input: Option<GraphInput>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_components: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: GraphInput) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_components(mut self, highlight_components: bool) -> Self {
        self.highlight_components = Some(highlight_components);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, DigraphError> {
        Ok(RenderConfig {
            input: self
                .input
                .ok_or_else(|| DigraphError::ConfigurationError {
                    message: "Missing required field: input".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| DigraphError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            output: self
                .output
                .ok_or_else(|| DigraphError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                })?,
            highlight_components: self.highlight_components.ok_or_else(|| {
                DigraphError::ConfigurationError {
                    message: "Missing required field: highlight_components".to_string(),
                }
            })?,
        })
    }
}
