//! Ship-note Draft - turns commit history into a release draft
//!
//! The pipeline is a pure function of its inputs:
//!
//! ```text
//! raw commits ─► classify ─► filter ─► merge changelog ─► cap ─► group ─► render
//! ```
//!
//! Every stage keeps the relative order of its input, so the order in which
//! the caller supplies commits is the order in which bullets are rendered.

pub mod budget;
pub mod changelog;
pub mod classifier;
pub mod filter;
pub mod generator;
pub mod grouping;
pub mod options;
pub mod render;
pub mod signal;
pub mod types;

pub use classifier::{CommitClassifier, ConventionalClassifier};
pub use generator::{Draft, DraftGenerator};
pub use options::DraftOptions;
pub use render::{DraftPayload, Sections};
pub use signal::LowSignalRules;
pub use types::{Bullet, BulletSource, CommitRecord, DraftContext, RawCommit, Stats};
