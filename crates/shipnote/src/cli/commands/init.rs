//! Init command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use shipnote_core::config::defaults::{
    DEFAULT_CONFIG_TEMPLATE, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};
use shipnote_core::config::Config;

use crate::cli::output;
use crate::cli::Cli;

/// Configuration file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// shipnote.toml with commented defaults
    #[default]
    Toml,
    /// shipnote.yaml
    Yaml,
}

/// Write a default ship-note configuration
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Configuration format
    #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
    pub format: ConfigFormat,

    /// Directory to write the configuration into
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Output file path (overrides --path and --format file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, format = ?self.format, "executing init command");

        let file_name = match self.format {
            ConfigFormat::Toml => DEFAULT_CONFIG_TOML,
            ConfigFormat::Yaml => DEFAULT_CONFIG_YAML,
        };
        let config_path = self
            .output
            .clone()
            .unwrap_or_else(|| self.path.join(file_name));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let content = match self.format {
            ConfigFormat::Toml => DEFAULT_CONFIG_TEMPLATE.to_string(),
            ConfigFormat::Yaml => serde_yaml::to_string(&Config::default())?,
        };

        if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, content)?;

        if !cli.quiet {
            output::success(&format!(
                "Created {}",
                output::path_style().apply_to(config_path.display())
            ));
        }

        Ok(())
    }
}
