use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogArgs, ClassifyArgs, ConfigArgs, PromptArgs, SynthArgs};

/// Turn a one-line app idea into a phased development plan
///
/// Blueprint classifies the idea, picks the development tasks it needs,
/// orders them into delivery phases by dependency and recommends a tech
/// stack. Everything is computed locally and deterministically. The same
/// engine is also available to AI assistants through an MCP (Model Context
/// Protocol) server.
#[derive(Parser)]
#[command(version, about, name = "bp")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/blueprint/config.json when that file exists
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Blueprint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Synthesize a full plan from an idea
    #[command(alias = "s")]
    Synth(SynthArgs),
    /// Show which feature tags an idea triggers
    #[command(alias = "c")]
    Classify(ClassifyArgs),
    /// Print the ready-to-use prompts of one plan node
    #[command(alias = "p")]
    Prompt(PromptArgs),
    /// List the node catalog
    #[command(alias = "ls")]
    Catalog(CatalogArgs),
    /// Show or initialize the configuration
    Config(ConfigArgs),
    /// Start the MCP server
    Serve,
}
