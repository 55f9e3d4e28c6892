//! Tag operations

use git2::{DescribeFormatOptions, DescribeOptions};
use tracing::{debug, instrument};

use shipnote_core::error::GitError;

use crate::repository::{GitRepo, Result};

impl GitRepo {
    /// Check whether a tag exists
    pub fn has_tag(&self, name: &str) -> Result<bool> {
        let tag_ref = format!("refs/tags/{}", name);

        match self.repo.find_reference(&tag_ref) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GitError::Git2(e)),
        }
    }

    /// Nearest tag reachable from HEAD, as `git describe --tags --abbrev=0`
    #[instrument(skip(self))]
    pub fn nearest_tag(&self) -> Option<String> {
        let head = match self.head_commit() {
            Ok(head) => head,
            Err(e) => {
                debug!(error = %e, "no HEAD commit to describe");
                return None;
            }
        };

        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let result = head
            .as_object()
            .describe(&opts)
            .and_then(|d| d.format(Some(&format)));

        match result {
            Ok(name) => {
                debug!(tag = %name, "found nearest tag");
                Some(name)
            }
            Err(e) => {
                debug!(error = %e.message(), "no reachable tag");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, init_repo, tag};

    #[test]
    fn test_has_tag() {
        let (temp, repo) = init_repo();
        let oid = commit_file(&repo, temp.path(), "a.txt", "feat: init");
        tag(&repo, "v1.0.0", oid);

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert!(git_repo.has_tag("v1.0.0").unwrap());
        assert!(!git_repo.has_tag("v9.9.9").unwrap());
    }

    #[test]
    fn test_nearest_tag_picks_closest() {
        let (temp, repo) = init_repo();
        let first = commit_file(&repo, temp.path(), "a.txt", "feat: init");
        tag(&repo, "v0.1.0", first);
        let second = commit_file(&repo, temp.path(), "b.txt", "feat: more");
        tag(&repo, "v0.2.0", second);
        commit_file(&repo, temp.path(), "c.txt", "fix: patch");

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git_repo.nearest_tag().as_deref(), Some("v0.2.0"));
    }

    #[test]
    fn test_nearest_tag_without_tags() {
        let (temp, repo) = init_repo();
        commit_file(&repo, temp.path(), "a.txt", "feat: init");

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert!(git_repo.nearest_tag().is_none());
    }
}
