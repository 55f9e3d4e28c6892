//! Draft generation

use tracing::{debug, info, instrument};

use crate::budget::cap_bullets;
use crate::changelog::{extract_changelog_items, merge_bullets};
use crate::classifier::{CommitClassifier, ConventionalClassifier};
use crate::filter::filter_commits;
use crate::grouping::group_bullets;
use crate::options::DraftOptions;
use crate::render::{build_sections, render_markdown, DraftPayload, Sections};
use crate::signal::LowSignalRules;
use crate::types::{Bullet, CommitRecord, DraftContext, RawCommit, Stats};

/// A generated draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    /// Context the draft was generated for
    pub context: DraftContext,
    /// Options the draft was generated with
    pub options: DraftOptions,
    /// Section lines
    pub sections: Sections,
    /// Bullets in rendering order
    pub items: Vec<Bullet>,
    /// Counts
    pub stats: Stats,
    /// Rendered markdown
    pub markdown: String,
}

impl Draft {
    /// Structured view of the draft
    pub fn payload(&self) -> DraftPayload<'_> {
        DraftPayload::new(
            &self.context,
            &self.options,
            self.stats,
            &self.sections,
            &self.items,
            &self.markdown,
        )
    }

    /// Structured view as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.payload().to_json()
    }
}

/// Draft generator
pub struct DraftGenerator {
    classifier: Box<dyn CommitClassifier>,
    rules: LowSignalRules,
}

impl DraftGenerator {
    /// Create a generator with the conventional classifier and default rules
    pub fn new() -> Self {
        Self {
            classifier: Box::new(ConventionalClassifier::new()),
            rules: LowSignalRules::default(),
        }
    }

    /// Use a custom classifier
    pub fn with_classifier<C: CommitClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Use a custom low-signal rule table
    pub fn with_rules(mut self, rules: LowSignalRules) -> Self {
        self.rules = rules;
        self
    }

    /// Classify commits in input order
    pub fn classify(&self, commits: &[RawCommit]) -> Vec<CommitRecord> {
        commits.iter().map(|c| self.classifier.classify(c)).collect()
    }

    /// Generate a draft
    ///
    /// `commits` are rendered in the order given. `changelog` is the raw
    /// changelog document, if one exists.
    #[instrument(skip_all, fields(repo = %context.repo_name, commits = commits.len()))]
    pub fn generate(
        &self,
        commits: &[RawCommit],
        changelog: Option<&str>,
        options: &DraftOptions,
        context: &DraftContext,
    ) -> Draft {
        info!(range = %context.range.range_spec, "generating draft");

        let records = self.classify(commits);
        let changelog_items = changelog.map(extract_changelog_items).unwrap_or_default();
        let changelog_available =
            !changelog_items.is_empty() && options.max_changelog_items != Some(0);

        let outcome = filter_commits(records, options, &self.rules, changelog_available);

        let suppress_changelog = commits.is_empty() || outcome.all_low_signal_filtered;
        if suppress_changelog && !changelog_items.is_empty() {
            debug!(
                empty_range = commits.is_empty(),
                all_low_signal = outcome.all_low_signal_filtered,
                "suppressing changelog bullets"
            );
        }
        let carried: &[String] = if suppress_changelog { &[] } else { &changelog_items };

        let merged = merge_bullets(&outcome.commits, carried);
        let capped = cap_bullets(merged, options.max_bullets, options.max_changelog_items);

        let commit_items_used = capped.iter().filter(|b| b.is_commit()).count();
        let stats = Stats {
            raw_commit_count: commits.len(),
            selected_commit_count: outcome.commits.len(),
            commit_items_used,
            changelog_items_used: capped.len() - commit_items_used,
            bullet_count: capped.len(),
        };

        let groups = group_bullets(capped, options.group_by);
        let items: Vec<Bullet> = groups.iter().cloned().collect();
        let sections = build_sections(&groups, &stats, options, context);
        let markdown = render_markdown(&sections);

        debug!(
            bullets = stats.bullet_count,
            changelog_items = stats.changelog_items_used,
            "draft generated"
        );

        Draft {
            context: context.clone(),
            options: options.clone(),
            sections,
            items,
            stats,
            markdown,
        }
    }
}

impl Default for DraftGenerator {
    fn default() -> Self {
        Self::new()
    }
}
