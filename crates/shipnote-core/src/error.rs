//! Error types for ship-note

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ShipNoteError
pub type Result<T> = std::result::Result<T, ShipNoteError>;

/// Main error type for ship-note operations
#[derive(Debug, Error)]
pub enum ShipNoteError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository not found
    #[error("Git repository not found at {0}")]
    RepositoryNotFound(PathBuf),

    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Both range selectors were supplied
    #[error("Use only one of --since-tag or --since-commit")]
    ConflictingRange,

    /// Tag not found
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Revision could not be resolved to a commit
    #[error("Could not resolve revision: {0}")]
    RevisionNotFound(String),

    /// Failed to walk history
    #[error("Could not read git history: {0}")]
    HistoryFailed(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}
