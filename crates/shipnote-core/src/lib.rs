//! Ship-note Core - shared foundation for draft generation
//!
//! This crate provides the error types, configuration file handling and the
//! small enums (preset, destination, grouping) shared by the git layer, the
//! draft pipeline and the CLI.

pub mod changelog;
pub mod config;
pub mod error;
pub mod types;

pub use changelog::read_changelog;
pub use error::{ConfigError, GitError, Result, ShipNoteError};
pub use types::{Destination, GroupBy, Preset, ResolvedRange};
