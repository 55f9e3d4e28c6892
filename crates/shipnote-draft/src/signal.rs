//! Low-signal commit detection

use std::collections::BTreeMap;

use crate::types::CommitRecord;

/// Table of `type -> keywords` marking administrative commits
///
/// A commit is low-signal when its type has an entry and its subject contains
/// one of the keywords, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowSignalRules {
    rules: BTreeMap<String, Vec<String>>,
}

impl Default for LowSignalRules {
    fn default() -> Self {
        Self::empty()
            .with_rule(
                "docs",
                ["devlog", "changelog", "release notes", "release-notes"],
            )
            .with_rule(
                "chore",
                ["release", "version", "dependency", "dependencies", "deps", "changelog"],
            )
    }
}

impl LowSignalRules {
    /// A table with no rules
    pub fn empty() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Add keywords for a commit type, extending any existing entry
    pub fn with_rule<I, S>(mut self, commit_type: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.rules.entry(commit_type.to_lowercase()).or_default();
        for keyword in keywords {
            let keyword = keyword.as_ref().to_lowercase();
            if !keyword.is_empty() && !entry.contains(&keyword) {
                entry.push(keyword);
            }
        }
        self
    }

    /// Whether the record is release or maintenance noise
    pub fn is_low_signal(&self, record: &CommitRecord) -> bool {
        self.matched_keyword(record).is_some()
    }

    /// First keyword of the record's type found in its subject
    pub fn matched_keyword(&self, record: &CommitRecord) -> Option<&str> {
        let keywords = self.rules.get(&record.commit_type)?;
        let subject = record.subject.to_lowercase();
        keywords
            .iter()
            .find(|k| subject.contains(k.as_str()))
            .map(String::as_str)
    }
}
