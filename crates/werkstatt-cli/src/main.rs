//! DS Werkstatt CLI application.
//!
//! Command-line interface for the CRISP-DM learning workspace.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use werkstatt_core::WorkspaceBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let workspace = WorkspaceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize workspace")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("DS Werkstatt started");

    match command {
        Some(Project { command }) => {
            Cli::new(workspace, renderer)
                .handle_project_command(command)
                .await
        }
        Some(Phase { command }) => {
            Cli::new(workspace, renderer)
                .handle_phase_command(command)
                .await
        }
        Some(Feature { command }) => {
            Cli::new(workspace, renderer)
                .handle_feature_command(command)
                .await
        }
        Some(Workspace { command }) => {
            Cli::new(workspace, renderer)
                .handle_workspace_command(command)
                .await
        }
        None => Cli::new(workspace, renderer).list_projects().await,
    }
}
