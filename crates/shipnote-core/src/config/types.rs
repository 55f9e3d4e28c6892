//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{Destination, GroupBy, Preset};

/// Main configuration for ship-note
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Draft rendering and filtering defaults
    pub draft: DraftConfig,

    /// Changelog source configuration
    pub changelog: ChangelogConfig,

    /// Links section configuration
    pub links: LinksConfig,
}

/// Draft defaults; unset values fall back to the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// Output preset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,

    /// Destination tone hint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,

    /// Grouping mode for "What shipped"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,

    /// Cap on commit-derived bullets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bullets: Option<usize>,

    /// Cap on changelog-derived bullets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_changelog_items: Option<usize>,

    /// Keep release/admin commits under the short preset
    pub keep_low_signal: bool,

    /// Title template, `{repo}` is replaced with the repository name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_template: Option<String>,

    /// Only include these commit types
    pub include_types: Vec<String>,

    /// Exclude these commit types
    pub exclude_types: Vec<String>,

    /// Only include these scopes (`general` for unscoped commits)
    pub include_scopes: Vec<String>,

    /// Exclude these scopes
    pub exclude_scopes: Vec<String>,

    /// Render the "Why it matters" section
    pub with_why: bool,

    /// Skip the "Validation" section
    pub skip_validation: bool,

    /// Skip the "Links" section
    pub skip_links: bool,
}

/// Changelog source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the repository root
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGELOG.md"),
        }
    }
}

/// Links section configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,

    /// Release URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_changelog_file() {
        let config = Config::default();
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
        assert!(config.draft.preset.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: Config = toml::from_str("[draft]\npreset = \"short\"\nmax_bullets = 3\n").unwrap();
        assert_eq!(config.draft.preset, Some(Preset::Short));
        assert_eq!(config.draft.max_bullets, Some(3));
        assert!(config.draft.group_by.is_none());
        assert_eq!(config.changelog.file, PathBuf::from("CHANGELOG.md"));
    }

    #[test]
    fn test_negative_cap_rejected() {
        let result: Result<Config, _> = toml::from_str("[draft]\nmax_bullets = -1\n");
        assert!(result.is_err());
    }
}
