//! Draft rendering
//!
//! A draft has five section slots in a fixed order. Empty slots are left out
//! of the markdown, except "What shipped" which falls back to a placeholder.

mod payload;

pub use payload::{DraftPayload, RepoInfo, SCHEMA_VERSION};

use serde::Serialize;
use tracing::{debug, instrument};

use shipnote_core::types::{Destination, Preset};

use crate::grouping::BulletGroups;
use crate::options::DraftOptions;
use crate::types::{DraftContext, Stats};

/// Line rendered when a draft has no bullets
pub const EMPTY_PLACEHOLDER: &str = "- No commits or changelog bullets found for selected range.";

/// Rendered section lines; an empty list means the section is omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sections {
    /// Title line
    pub title: String,
    /// "What shipped" lines
    pub what_shipped: Vec<String>,
    /// "Why it matters" lines
    pub why_it_matters: Vec<String>,
    /// "Validation" lines
    pub validation: Vec<String>,
    /// "Links" lines
    pub links: Vec<String>,
}

/// Default title template for a preset and destination
pub fn default_title_template(preset: Preset, destination: Destination) -> &'static str {
    match (preset, destination) {
        (Preset::Short, Destination::Social) => "# {repo} social update",
        (Preset::Short, Destination::Internal) => "# {repo} internal update",
        (Preset::Short, _) => "# {repo} update",
        (Preset::Standard, Destination::Social) => "# {repo} social draft",
        (Preset::Standard, Destination::Internal) => "# {repo} internal release brief",
        (Preset::Standard, Destination::Update) => "# {repo} update draft",
        (Preset::Standard, Destination::Release) => "# {repo} devlog draft",
    }
}

fn title_line(options: &DraftOptions, context: &DraftContext) -> String {
    let template = options
        .title_template
        .as_deref()
        .unwrap_or_else(|| default_title_template(options.preset, options.destination));
    template.replace("{repo}", &context.repo_name)
}

fn what_shipped_lines(groups: &BulletGroups) -> Vec<String> {
    if groups.is_empty() {
        return vec![EMPTY_PLACEHOLDER.to_string()];
    }

    match groups {
        BulletGroups::Flat(bullets) => bullets.iter().map(|b| format!("- {}", b.text)).collect(),
        BulletGroups::Grouped(groups) => {
            let mut lines = Vec::new();
            for group in groups {
                lines.push(format!("- [{}]", group.key));
                lines.extend(group.bullets.iter().map(|b| format!("  - {}", b.text)));
            }
            lines
        }
    }
}

fn why_lines(stats: &Stats, context: &DraftContext) -> Vec<String> {
    if stats.bullet_count == 0 {
        return vec![
            "- No substantive draft items were found for the selected range; this may be a no-change or maintenance-only release."
                .to_string(),
        ];
    }

    let mut lines = vec![format!(
        "- Covers `{}` using {} distilled bullet(s) from {} commit(s).",
        context.range_label(),
        stats.commit_items_used,
        stats.selected_commit_count
    )];

    if stats.changelog_items_used > 0 {
        lines.push(format!(
            "- Adds {} changelog bullet(s) to fill context that commit subjects alone may miss.",
            stats.changelog_items_used
        ));
    } else {
        lines.push(
            "- Keeps the summary focused on commit-level changes for faster release communication."
                .to_string(),
        );
    }

    lines
}

fn validation_lines(options: &DraftOptions) -> Vec<String> {
    if options.skip_validation || !options.preset.includes_validation() {
        return Vec::new();
    }
    vec!["- Tests: <fill>".to_string(), "- Secret scan: <fill>".to_string()]
}

fn link_lines(options: &DraftOptions) -> Vec<String> {
    if options.skip_links {
        return Vec::new();
    }
    let mut lines = Vec::new();
    if let Some(url) = &options.repo_url {
        lines.push(format!("- Repo: {}", url));
    }
    if let Some(url) = &options.release_url {
        lines.push(format!("- Release: {}", url));
    }
    lines
}

/// Build all section lines for a draft
#[instrument(skip_all, fields(bullets = groups.len()))]
pub fn build_sections(
    groups: &BulletGroups,
    stats: &Stats,
    options: &DraftOptions,
    context: &DraftContext,
) -> Sections {
    let sections = Sections {
        title: title_line(options, context),
        what_shipped: what_shipped_lines(groups),
        why_it_matters: if options.with_why {
            why_lines(stats, context)
        } else {
            Vec::new()
        },
        validation: validation_lines(options),
        links: link_lines(options),
    };
    debug!(
        why = !sections.why_it_matters.is_empty(),
        validation = !sections.validation.is_empty(),
        links = !sections.links.is_empty(),
        "sections built"
    );
    sections
}

/// Render sections as markdown
///
/// The title is followed by a blank line; each present section is a `## `
/// heading, its lines and a blank separator. The text ends with one newline.
pub fn render_markdown(sections: &Sections) -> String {
    let mut output = String::new();
    output.push_str(&sections.title);
    output.push('\n');

    let named = [
        ("What shipped", &sections.what_shipped),
        ("Why it matters", &sections.why_it_matters),
        ("Validation", &sections.validation),
        ("Links", &sections.links),
    ];

    for (name, lines) in named {
        if lines.is_empty() {
            continue;
        }
        output.push_str(&format!("\n## {}\n", name));
        for line in lines {
            output.push_str(line);
            output.push('\n');
        }
    }

    output
}
