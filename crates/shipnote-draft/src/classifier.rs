//! Commit classification
//!
//! Turns the first line of a commit message into a [`CommitRecord`]. Messages
//! following the Conventional Commits shape `type(scope)!: subject` keep their
//! type and scope; everything else becomes `other` / `general`.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{CommitRecord, RawCommit, OTHER_TYPE};

/// Regex for conventional commit subject lines
static CONVENTIONAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?:\s+(?P<subject>\S.*)$",
    )
    .expect("Invalid regex")
});

/// Trait for commit classifiers
pub trait CommitClassifier: Send + Sync {
    /// Classify one raw commit; never fails
    fn classify(&self, commit: &RawCommit) -> CommitRecord;
}

/// Classifier for Conventional Commits subjects
#[derive(Debug, Clone, Copy, Default)]
pub struct ConventionalClassifier;

impl ConventionalClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }
}

impl CommitClassifier for ConventionalClassifier {
    fn classify(&self, commit: &RawCommit) -> CommitRecord {
        let first_line = commit.message.lines().next().unwrap_or("").trim();

        match CONVENTIONAL_REGEX.captures(first_line) {
            Some(caps) => {
                let commit_type = caps.name("type").map_or(OTHER_TYPE, |m| m.as_str());
                let scope = caps.name("scope").map(|m| m.as_str());
                let subject = caps.name("subject").map_or("", |m| m.as_str().trim());
                CommitRecord::new(&commit.id, commit_type, scope, subject)
                    .with_breaking(caps.name("breaking").is_some())
            }
            None => CommitRecord::new(&commit.id, OTHER_TYPE, None, first_line),
        }
    }
}
