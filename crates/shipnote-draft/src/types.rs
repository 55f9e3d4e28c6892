//! Draft types

use serde::{Deserialize, Serialize};

use shipnote_core::types::ResolvedRange;

/// Scope assigned to commits without an explicit one, and to changelog bullets
pub const GENERAL_SCOPE: &str = "general";

/// Type assigned to messages that are not conventional commits
pub const OTHER_TYPE: &str = "other";

/// A commit as supplied by the history collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Unique id within a run (the commit hash)
    pub id: String,
    /// Full commit message; only the first line is used
    pub message: String,
}

impl RawCommit {
    /// Create a new raw commit
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// A classified commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Id of the originating commit
    pub id: String,
    /// Commit type (feat, fix, ..., `other` when unparseable)
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Scope, `general` when absent
    pub scope: String,
    /// Subject line without the conventional prefix
    pub subject: String,
    /// Whether the `!` breaking marker was present
    pub breaking: bool,
}

impl CommitRecord {
    /// Create a record; a missing or blank scope becomes `general`
    pub fn new(
        id: impl Into<String>,
        commit_type: impl Into<String>,
        scope: Option<&str>,
        subject: impl Into<String>,
    ) -> Self {
        let scope = scope
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| GENERAL_SCOPE.to_string());

        Self {
            id: id.into(),
            commit_type: commit_type.into().to_lowercase(),
            scope,
            subject: subject.into(),
            breaking: false,
        }
    }

    /// Mark the record as a breaking change
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }
}

/// Where a bullet came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletSource {
    /// A commit subject
    Commit,
    /// A line from the changelog
    Changelog,
}

/// One line destined for "What shipped"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    /// Bullet text
    pub text: String,
    /// Origin of the bullet
    pub source: BulletSource,
    /// Commit type, `general` for changelog bullets
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Commit scope, `general` for changelog bullets
    pub scope: String,
    /// Commit id for commit bullets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Bullet {
    /// Bullet for a classified commit
    pub fn from_commit(record: &CommitRecord) -> Self {
        Self {
            text: record.subject.clone(),
            source: BulletSource::Commit,
            commit_type: record.commit_type.clone(),
            scope: record.scope.clone(),
            id: Some(record.id.clone()),
        }
    }

    /// Bullet for a changelog line
    pub fn from_changelog(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: BulletSource::Changelog,
            commit_type: GENERAL_SCOPE.to_string(),
            scope: GENERAL_SCOPE.to_string(),
            id: None,
        }
    }

    /// Whether the bullet came from a commit
    pub fn is_commit(&self) -> bool {
        self.source == BulletSource::Commit
    }
}

/// Per-run context threaded explicitly through the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftContext {
    /// Repository name used in the title
    pub repo_name: String,
    /// Range the commits were collected from
    pub range: ResolvedRange,
}

impl DraftContext {
    /// Create a new context
    pub fn new(repo_name: impl Into<String>, range: ResolvedRange) -> Self {
        Self {
            repo_name: repo_name.into(),
            range,
        }
    }

    /// Label for the covered range, `start` standing in for a missing base
    pub fn range_label(&self) -> String {
        format!(
            "{}..{}",
            self.range.base_ref.as_deref().unwrap_or("start"),
            self.range.target_ref
        )
    }
}

/// Counts produced alongside a draft
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Commits in the resolved range
    pub raw_commit_count: usize,
    /// Commits surviving type/scope/low-signal filtering
    pub selected_commit_count: usize,
    /// Commit bullets rendered
    pub commit_items_used: usize,
    /// Changelog bullets rendered
    pub changelog_items_used: usize,
    /// Total bullets rendered
    pub bullet_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_scope_defaults_to_general() {
        assert_eq!(CommitRecord::new("1", "feat", None, "x").scope, "general");
        assert_eq!(CommitRecord::new("1", "feat", Some("  "), "x").scope, "general");
        assert_eq!(CommitRecord::new("1", "FEAT", Some("API"), "x").scope, "api");
        assert_eq!(CommitRecord::new("1", "FEAT", Some("API"), "x").commit_type, "feat");
    }

    #[test]
    fn test_bullet_serializes_type_field() {
        let bullet = Bullet::from_changelog("Added X");
        let json = serde_json::to_value(&bullet).unwrap();
        assert_eq!(json["type"], "general");
        assert_eq!(json["source"], "changelog");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_range_label() {
        let ctx = DraftContext::new("demo", ResolvedRange::full_history());
        assert_eq!(ctx.range_label(), "start..HEAD");

        let ctx = DraftContext::new("demo", ResolvedRange::since("v0.1.0"));
        assert_eq!(ctx.range_label(), "v0.1.0..HEAD");
    }
}
