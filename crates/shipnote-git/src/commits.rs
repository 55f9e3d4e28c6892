//! Commit history operations

use git2::{Oid, Sort};
use tracing::{debug, instrument};

use shipnote_core::error::GitError;
use shipnote_core::types::ResolvedRange;

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// List the commits of a resolved range, newest first
    #[instrument(skip(self), fields(range = %range.range_spec))]
    pub fn commits_in_range(&self, range: &ResolvedRange) -> Result<Vec<CommitInfo>> {
        let commits = match &range.base_ref {
            Some(base) => {
                let base_oid = self.resolve_commit(base)?.id();
                self.commits_since_oid(base_oid)?
            }
            None => self.all_commits()?,
        };

        debug!(count = commits.len(), "collected commits in range");
        Ok(commits)
    }

    /// Get commits reachable from HEAD but not from `since`
    pub fn commits_since_oid(&self, since: Oid) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;
        revwalk.hide(since)?;

        self.collect_walk(revwalk)
    }

    /// Get all commits on the current branch
    pub fn all_commits(&self) -> Result<Vec<CommitInfo>> {
        let head = self.head_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        self.collect_walk(revwalk)
    }

    fn collect_walk(&self, revwalk: git2::Revwalk<'_>) -> Result<Vec<CommitInfo>> {
        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid.map_err(|e| GitError::HistoryFailed(e.message().to_string()))?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        Ok(commits)
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let message = commit.summary().unwrap_or("(no message)").to_string();
    let info = CommitInfo::new(hash, message);

    match commit.body() {
        Some(body) => info.with_body(body),
        None => info,
    }
}
