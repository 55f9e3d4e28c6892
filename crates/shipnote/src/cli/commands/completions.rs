//! Shell completions generation command

use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::{output, Cli};

/// Print or save a completion script for ship-note
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Target shell (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();

        let Some(path) = &self.output else {
            generate(self.shell, &mut cmd, bin_name, &mut io::stdout());
            return Ok(());
        };

        let mut file = std::fs::File::create(path)?;
        generate(self.shell, &mut cmd, bin_name, &mut file);
        if !cli.quiet {
            output::success(&format!(
                "Completions for {} written to {}",
                self.shell,
                output::path_style().apply_to(path.display())
            ));
        }

        Ok(())
    }
}
