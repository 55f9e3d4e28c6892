//! Commit range resolution
//!
//! A draft covers `base..HEAD`. The base is chosen by a priority-ordered list
//! of strategies; the first one that applies wins:
//!
//! 1. an explicit `--since-commit` revision
//! 2. an explicit `--since-tag` tag
//! 3. the nearest tag reachable from HEAD
//! 4. the full history

use tracing::{debug, info, instrument};

use shipnote_core::error::GitError;
use shipnote_core::types::ResolvedRange;

use crate::repository::{GitRepo, Result};

/// User-supplied range selectors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSelector {
    /// Base the range on this tag
    pub since_tag: Option<String>,
    /// Base the range on this revision
    pub since_commit: Option<String>,
}

impl RangeSelector {
    /// Selector with no explicit base
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.since_tag = Some(tag.into());
        self
    }

    /// Set the base revision
    pub fn with_commit(mut self, rev: impl Into<String>) -> Self {
        self.since_commit = Some(rev.into());
        self
    }
}

/// One way of turning a selector into a range
pub trait RangeStrategy: Send + Sync {
    /// Strategy name, for logging
    fn name(&self) -> &'static str;

    /// Resolve the range, or `None` when this strategy does not apply
    fn resolve(&self, repo: &GitRepo, selector: &RangeSelector) -> Result<Option<ResolvedRange>>;
}

/// `--since-commit`
pub struct SinceCommit;

impl RangeStrategy for SinceCommit {
    fn name(&self) -> &'static str {
        "since-commit"
    }

    fn resolve(&self, repo: &GitRepo, selector: &RangeSelector) -> Result<Option<ResolvedRange>> {
        let Some(rev) = &selector.since_commit else {
            return Ok(None);
        };
        repo.resolve_commit(rev)?;
        Ok(Some(ResolvedRange::since(rev.as_str())))
    }
}

/// `--since-tag`
pub struct SinceTag;

impl RangeStrategy for SinceTag {
    fn name(&self) -> &'static str {
        "since-tag"
    }

    fn resolve(&self, repo: &GitRepo, selector: &RangeSelector) -> Result<Option<ResolvedRange>> {
        let Some(tag) = &selector.since_tag else {
            return Ok(None);
        };
        if !repo.has_tag(tag)? {
            return Err(GitError::TagNotFound(tag.clone()));
        }
        Ok(Some(ResolvedRange::since(tag.as_str())))
    }
}

/// Nearest tag reachable from HEAD
pub struct NearestTag;

impl RangeStrategy for NearestTag {
    fn name(&self) -> &'static str {
        "nearest-tag"
    }

    fn resolve(&self, repo: &GitRepo, _selector: &RangeSelector) -> Result<Option<ResolvedRange>> {
        Ok(repo.nearest_tag().map(ResolvedRange::since))
    }
}

/// Everything reachable from HEAD
pub struct FullHistory;

impl RangeStrategy for FullHistory {
    fn name(&self) -> &'static str {
        "full-history"
    }

    fn resolve(&self, _repo: &GitRepo, _selector: &RangeSelector) -> Result<Option<ResolvedRange>> {
        Ok(Some(ResolvedRange::full_history()))
    }
}

/// The built-in strategies in priority order
pub fn default_strategies() -> Vec<Box<dyn RangeStrategy>> {
    vec![
        Box::new(SinceCommit),
        Box::new(SinceTag),
        Box::new(NearestTag),
        Box::new(FullHistory),
    ]
}

/// Resolve a selector with the default strategies
#[instrument(skip(repo))]
pub fn resolve_range(repo: &GitRepo, selector: &RangeSelector) -> Result<ResolvedRange> {
    resolve_with(repo, selector, &default_strategies())
}

/// Resolve a selector by trying `strategies` in order
pub fn resolve_with(
    repo: &GitRepo,
    selector: &RangeSelector,
    strategies: &[Box<dyn RangeStrategy>],
) -> Result<ResolvedRange> {
    if selector.since_tag.is_some() && selector.since_commit.is_some() {
        return Err(GitError::ConflictingRange);
    }

    for strategy in strategies {
        if let Some(range) = strategy.resolve(repo, selector)? {
            info!(strategy = strategy.name(), range = %range.range_spec, "resolved commit range");
            return Ok(range);
        }
        debug!(strategy = strategy.name(), "strategy not applicable");
    }

    Ok(ResolvedRange::full_history())
}
