//! Ship-note Git - commit history access for draft generation
//!
//! This crate opens repositories, resolves the commit range a draft covers
//! and lists the commits inside it, newest first.

mod commits;
pub mod range;
mod repository;
mod tags;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use range::{default_strategies, resolve_range, resolve_with, RangeSelector, RangeStrategy};
pub use repository::{GitRepo, Result};
pub use shipnote_core::types::ResolvedRange;
pub use types::CommitInfo;
