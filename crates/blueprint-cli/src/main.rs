//! Blueprint CLI Application
//!
//! Command-line and MCP front-end for the blueprint idea-to-plan engine.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use blueprint_core::SynthesizerBuilder;
use clap::{CommandFactory, Parser};
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BlueprintMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    let Some(command) = command else {
        Args::command()
            .print_help()
            .context("Failed to print help")?;
        return Ok(());
    };

    let synthesizer = SynthesizerBuilder::new()
        .with_config_path(config_file)
        .build()
        .context("Failed to initialize synthesizer")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Blueprint started");

    match command {
        Synth(args) => Cli::new(synthesizer, renderer).synth(args),
        Classify(args) => Cli::new(synthesizer, renderer).classify(args),
        Prompt(args) => Cli::new(synthesizer, renderer).prompt(args),
        Catalog(args) => Cli::new(synthesizer, renderer).catalog(args),
        Config(args) => Cli::new(synthesizer, renderer).config(args),
        Serve => {
            info!("Starting Blueprint MCP server");
            run_stdio_server(BlueprintMcpServer::new(synthesizer))
                .await
                .context("MCP server failed")
        }
    }
}
