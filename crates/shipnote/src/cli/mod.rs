//! CLI definition and command handling

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{CompletionsCommand, DraftCommand, InitCommand};

/// ship-note - generate release and devlog drafts from git history
#[derive(Debug, Parser)]
#[command(name = "ship-note")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a markdown devlog draft
    Draft(DraftCommand),

    /// Write a default ship-note configuration
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self.command {
            Commands::Draft(ref cmd) => cmd.execute(self),
            Commands::Init(ref cmd) => cmd.execute(self),
            Commands::Completions(ref cmd) => cmd.execute(self),
        }
    }
}
