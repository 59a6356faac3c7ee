//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::DigraphError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, DigraphError> {
        match command {
            Commands::Render {
                graph,
                format,
                output,
                highlight_components,
            } => RenderConfig::builder()
                .with_input(graph.into())
                .with_format(format)
                .with_output(output)
                .with_highlight_components(highlight_components)
                .build(),
            _ => Err(DigraphError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for drawing a graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
