//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CheckConfig;
use crate::error::DigraphError;

impl FromCommand for CheckConfig {
    fn from_command(command: Commands) -> Result<Self, DigraphError> {
        match command {
            Commands::Check {
                graph,
                format,
                component_display,
                error_on_cycles,
                timings,
            } => CheckConfig::builder()
                .with_input(graph.into())
                .with_format(format.format)
                .with_error_on_cycles(error_on_cycles)
                .with_show_timings(timings)
                .with_max_components(component_display.max_components)
                .build(),
            _ => Err(DigraphError::ConfigurationError {
                message: "Invalid command type for CheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CheckConfig);

/// Execute the check command for analyzing a graph's structure
pub fn execute_check_command(command: Commands) -> Result<()> {
    let config =
        CheckConfig::from_command(command).wrap_err("Failed to parse check command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::check::CheckExecutor;
    CheckExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};

    #[test]
    fn test_config_from_check_command() {
        let cli = Cli::try_parse_from([
            "digraph-dfs",
            "check",
            "-e",
            "a:b",
            "--timings",
            "--max-components",
            "3",
        ])
        .unwrap();

        let config = CheckConfig::try_from(cli.command).unwrap();

        assert_eq!(config.input.edges.len(), 1);
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.show_timings);
        assert!(!config.error_on_cycles);
        assert_eq!(config.max_components, Some(3));
    }

    #[test]
    fn test_config_from_wrong_command() {
        let cli = Cli::try_parse_from(["digraph-dfs", "render", "-e", "a:b"]).unwrap();

        assert!(CheckConfig::from_command(cli.command).is_err());
    }
}
