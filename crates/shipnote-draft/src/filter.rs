//! Commit filtering

use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::options::DraftOptions;
use crate::signal::LowSignalRules;
use crate::types::CommitRecord;

/// Result of filtering classified commits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Surviving records, in input order
    pub commits: Vec<CommitRecord>,
    /// The low-signal step would have removed every remaining record
    pub all_low_signal_filtered: bool,
}

fn passes(value: &str, include: &BTreeSet<String>, exclude: &BTreeSet<String>) -> bool {
    if !include.is_empty() && !include.contains(value) {
        return false;
    }
    !exclude.contains(value)
}

/// Apply type, scope and low-signal filtering
///
/// `changelog_available` decides the fallback: when the low-signal step would
/// empty a non-empty set and there is no changelog to stand in, the step is
/// skipped and the commits are kept.
#[instrument(skip_all, fields(commits = records.len()))]
pub fn filter_commits(
    records: Vec<CommitRecord>,
    options: &DraftOptions,
    rules: &LowSignalRules,
    changelog_available: bool,
) -> FilterOutcome {
    let selected: Vec<CommitRecord> = records
        .into_iter()
        .filter(|r| passes(&r.commit_type, &options.include_types, &options.exclude_types))
        .filter(|r| passes(&r.scope, &options.include_scopes, &options.exclude_scopes))
        .collect();

    if !options.filters_low_signal() || selected.is_empty() {
        debug!(selected = selected.len(), "filtered commits");
        return FilterOutcome {
            commits: selected,
            all_low_signal_filtered: false,
        };
    }

    let high_signal: Vec<CommitRecord> = selected
        .iter()
        .filter(|r| match rules.matched_keyword(r) {
            Some(keyword) => {
                debug!(id = %r.id, commit_type = %r.commit_type, keyword, "low-signal commit");
                false
            }
            None => true,
        })
        .cloned()
        .collect();

    if !high_signal.is_empty() {
        debug!(
            selected = high_signal.len(),
            dropped = selected.len() - high_signal.len(),
            "dropped low-signal commits"
        );
        return FilterOutcome {
            commits: high_signal,
            all_low_signal_filtered: false,
        };
    }

    if changelog_available {
        debug!("all commits are low-signal, relying on changelog");
        FilterOutcome {
            commits: Vec::new(),
            all_low_signal_filtered: true,
        }
    } else {
        debug!("all commits are low-signal and no changelog, keeping commits");
        FilterOutcome {
            commits: selected,
            all_low_signal_filtered: true,
        }
    }
}
