//! Agenda CLI Application
//!
//! Command-line interface and MCP server for storing AI-generated event
//! plans and exporting them as spreadsheets or PDFs.

mod args;
mod cli;
mod mcp;
mod renderer;

use agenda_core::{params::ListPlans, AgendaBuilder};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, AgendaMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        export_dir,
        in_memory,
        no_color,
        command,
    } = Args::parse();

    let mut builder = AgendaBuilder::new()
        .with_database_path(database_file)
        .with_export_dir(export_dir);
    if in_memory {
        builder = builder.in_memory();
    }
    let agenda = builder.build().await.context("Failed to initialize agenda")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Agenda started");

    match command {
        Some(Plan { command }) => {
            Cli::new(agenda, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Export(args)) => Cli::new(agenda, renderer).export(args).await,
        Some(Download(args)) => Cli::new(agenda, renderer).download(args).await,
        Some(Serve) => {
            info!("Starting Agenda MCP server");
            run_stdio_server(AgendaMcpServer::new(agenda))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(agenda, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
