//! Waypoint CLI Application
//!
//! Command-line interface for the Waypoint roadmap generation tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::{AuthContext, RoadmapServiceBuilder};
use Commands::*;

/// Fallback owner when neither --user nor $USER is available.
const DEFAULT_USER: &str = "local";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let service = RoadmapServiceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize roadmap service")?;

    let auth = AuthContext::new(
        user.or_else(|| std::env::var("USER").ok())
            .unwrap_or_else(|| DEFAULT_USER.to_string()),
    );

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Generate(args)) => Cli::new(service, renderer, auth).generate(args).await,
        Some(List(args)) => Cli::new(service, renderer, auth).list(args).await,
        Some(Show(args)) => Cli::new(service, renderer, auth).show(args).await,
        Some(Edit(args)) => Cli::new(service, renderer, auth).edit(args).await,
        Some(Duplicate(args)) => Cli::new(service, renderer, auth).duplicate(args).await,
        Some(Delete(args)) => Cli::new(service, renderer, auth).delete(args).await,
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(service, auth))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(service, renderer, auth)
                .list(args::ListArgs {
                    category: None,
                    difficulty: None,
                })
                .await
        }
    }
}
