//! Draft options

use serde::Serialize;
use std::collections::BTreeSet;

use shipnote_core::types::{Destination, GroupBy, Preset};

/// Immutable knobs for one draft run
///
/// Sets are lowercased on insertion and serialize sorted, so two runs with the
/// same options produce the same payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftOptions {
    /// Tag the range was based on
    pub since_tag: Option<String>,
    /// Revision the range was based on
    pub since_commit: Option<String>,
    /// Only keep these commit types
    pub include_types: BTreeSet<String>,
    /// Drop these commit types
    pub exclude_types: BTreeSet<String>,
    /// Only keep these scopes
    pub include_scopes: BTreeSet<String>,
    /// Drop these scopes
    pub exclude_scopes: BTreeSet<String>,
    /// Output preset
    pub preset: Preset,
    /// Destination tone hint
    pub destination: Destination,
    /// Grouping mode
    pub group_by: GroupBy,
    /// Cap on commit bullets; `None` means uncapped
    pub max_bullets: Option<usize>,
    /// Cap on changelog bullets; `None` means uncapped
    pub max_changelog_items: Option<usize>,
    /// Keep low-signal commits under the short preset
    pub keep_low_signal: bool,
    /// Omit the validation section
    pub skip_validation: bool,
    /// Omit the links section
    pub skip_links: bool,
    /// Render the "Why it matters" section
    pub with_why: bool,
    /// Title template overriding the preset/destination default
    pub title_template: Option<String>,
    /// Repository URL for the links section
    pub repo_url: Option<String>,
    /// Release URL for the links section
    pub release_url: Option<String>,
}

fn lowered<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

impl DraftOptions {
    /// Options with the standard preset and no caps
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preset
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Set the destination
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Set the grouping mode
    pub fn with_group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = group_by;
        self
    }

    /// Set the commit bullet cap
    pub fn with_max_bullets(mut self, max: Option<usize>) -> Self {
        self.max_bullets = max;
        self
    }

    /// Set the changelog bullet cap
    pub fn with_max_changelog_items(mut self, max: Option<usize>) -> Self {
        self.max_changelog_items = max;
        self
    }

    /// Fill unset caps from the preset defaults
    pub fn with_preset_caps(mut self) -> Self {
        self.max_bullets = self.max_bullets.or(Some(self.preset.default_max_bullets()));
        self.max_changelog_items = self
            .max_changelog_items
            .or(Some(self.preset.default_max_changelog_items()));
        self
    }

    /// Set the included types
    pub fn with_include_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_types = lowered(types);
        self
    }

    /// Set the excluded types
    pub fn with_exclude_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_types = lowered(types);
        self
    }

    /// Set the included scopes
    pub fn with_include_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_scopes = lowered(scopes);
        self
    }

    /// Set the excluded scopes
    pub fn with_exclude_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_scopes = lowered(scopes);
        self
    }

    /// Keep low-signal commits
    pub fn with_keep_low_signal(mut self, keep: bool) -> Self {
        self.keep_low_signal = keep;
        self
    }

    /// Skip the validation section
    pub fn with_skip_validation(mut self, skip: bool) -> Self {
        self.skip_validation = skip;
        self
    }

    /// Skip the links section
    pub fn with_skip_links(mut self, skip: bool) -> Self {
        self.skip_links = skip;
        self
    }

    /// Render the "Why it matters" section
    pub fn with_why(mut self, with_why: bool) -> Self {
        self.with_why = with_why;
        self
    }

    /// Override the title template
    pub fn with_title_template(mut self, template: impl Into<String>) -> Self {
        self.title_template = Some(template.into());
        self
    }

    /// Set the repository URL
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Set the release URL
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_url = Some(url.into());
        self
    }

    /// Record the range selectors used to collect commits
    pub fn with_range_selectors(
        mut self,
        since_tag: Option<String>,
        since_commit: Option<String>,
    ) -> Self {
        self.since_tag = since_tag;
        self.since_commit = since_commit;
        self
    }

    /// Whether the low-signal step applies to this run
    pub fn filters_low_signal(&self) -> bool {
        self.preset.filters_low_signal() && !self.keep_low_signal
    }
}
