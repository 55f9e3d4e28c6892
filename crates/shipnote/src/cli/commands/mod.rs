//! CLI commands

mod completions;
mod draft;
mod init;

pub use completions::CompletionsCommand;
pub use draft::DraftCommand;
pub use init::InitCommand;
