//! Exit codes for the CLI

use shipnote_core::{ConfigError, GitError, ShipNoteError};

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Map an error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<GitError>() {
            return GIT_ERROR;
        }
        if cause.is::<ConfigError>() {
            return CONFIG_ERROR;
        }
        if let Some(err) = cause.downcast_ref::<ShipNoteError>() {
            return match err {
                ShipNoteError::Git(_) => GIT_ERROR,
                ShipNoteError::Config(_) => CONFIG_ERROR,
                _ => ERROR,
            };
        }
    }
    ERROR
}
