//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "shipnote.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "shipnote.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".shipnote.toml",
        ".shipnote.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# ship-note configuration
# Command-line flags override these values; unset caps follow the preset.

[draft]
# preset = "standard"        # short | standard
# destination = "release"    # release | update | social | internal
# group_by = "none"          # none | type | scope
# max_bullets = 12
# max_changelog_items = 6
# title_template = "# {repo} devlog draft"
keep_low_signal = false
include_types = []
exclude_types = []
include_scopes = []
exclude_scopes = []
with_why = false
skip_validation = false
skip_links = false

[changelog]
file = "CHANGELOG.md"

[links]
# repo_url = "https://github.com/you/repo"
# release_url = "https://github.com/you/repo/releases/latest"
"##;
