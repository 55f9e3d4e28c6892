//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_draft(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_draft(config: &Config) -> Result<()> {
    if let Some(template) = &config.draft.title_template {
        if template.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "draft.title_template".to_string(),
                message: "title template cannot be empty".to_string(),
            }
            .into());
        }
    }

    let lists = [
        ("draft.include_types", &config.draft.include_types),
        ("draft.exclude_types", &config.draft.exclude_types),
        ("draft.include_scopes", &config.draft.include_scopes),
        ("draft.exclude_scopes", &config.draft.exclude_scopes),
    ];
    for (field, values) in lists {
        if let Some(i) = values.iter().position(|v| v.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: format!("{}[{}]", field, i),
                message: "entry cannot be empty".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "changelog file cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}
