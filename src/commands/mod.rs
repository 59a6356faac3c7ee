//! Command implementations for the digraph-dfs CLI
//!
//! This module contains the implementations for each CLI command:
//! - check: Check a graph for cycles and report its structure
//! - render: Render a graph as a diagram

pub mod check;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Check { .. } => check::execute_check_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
