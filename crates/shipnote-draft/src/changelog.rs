//! Changelog extraction and merging
//!
//! Only the most recent release section is read: the bullets between the
//! first `## ` heading and the next one. Commit bullets and changelog bullets
//! are then merged, dropping anything whose canonical text was already seen.

use std::collections::HashSet;
use tracing::{debug, instrument};

use crate::types::{Bullet, CommitRecord};

/// Extract top-level bullet items from the latest changelog section
///
/// Without any `## ` heading the whole document is scanned. Only lines that
/// start at column 0 with `- ` or `* ` count; nested items are ignored.
pub fn extract_changelog_items(document: &str) -> Vec<String> {
    let has_sections = document.lines().any(is_section_heading);
    let mut in_section = !has_sections;
    let mut items = Vec::new();

    for line in document.lines() {
        if is_section_heading(line) {
            if in_section {
                break;
            }
            in_section = true;
            continue;
        }
        if !in_section {
            continue;
        }
        if let Some(text) = line
            .strip_prefix("- ")
            .or_else(|| line.strip_prefix("* "))
        {
            let text = text.trim();
            if !text.is_empty() {
                items.push(text.to_string());
            }
        }
    }

    items
}

fn is_section_heading(line: &str) -> bool {
    line.trim_start().starts_with("## ")
}

/// Canonical form used for bullet equality
///
/// Leading bullet markers are stripped, the text is case-folded, backticks
/// removed, every non-alphanumeric character becomes a space and whitespace
/// is collapsed.
pub fn canonical_text(text: &str) -> String {
    let stripped = text.trim_start_matches(|c: char| c == '-' || c == '*' || c.is_whitespace());
    let folded: String = stripped
        .to_lowercase()
        .chars()
        .filter(|c| *c != '`')
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Merge commit bullets with changelog items
///
/// Commit bullets come first and win ties. Items with an empty canonical
/// form are dropped.
#[instrument(skip_all, fields(commits = commits.len(), changelog = changelog_items.len()))]
pub fn merge_bullets(commits: &[CommitRecord], changelog_items: &[String]) -> Vec<Bullet> {
    let mut seen = HashSet::new();
    let mut bullets = Vec::with_capacity(commits.len() + changelog_items.len());

    let candidates = commits
        .iter()
        .map(Bullet::from_commit)
        .chain(changelog_items.iter().map(Bullet::from_changelog));

    for bullet in candidates {
        let key = canonical_text(&bullet.text);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        bullets.push(bullet);
    }

    debug!(merged = bullets.len(), "merged bullets");
    bullets
}
