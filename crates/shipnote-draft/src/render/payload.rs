//! Structured JSON payload

use serde::Serialize;

use shipnote_core::types::ResolvedRange;

use super::Sections;
use crate::options::DraftOptions;
use crate::types::{Bullet, DraftContext, Stats};

/// Version of the payload layout
pub const SCHEMA_VERSION: &str = "1.0";

/// Repository identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    /// Repository name
    pub name: String,
}

/// Machine-readable form of a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftPayload<'a> {
    pub schema_version: &'static str,
    pub repo: RepoInfo,
    pub range: &'a ResolvedRange,
    pub options: &'a DraftOptions,
    pub stats: Stats,
    pub sections: &'a Sections,
    pub items: &'a [Bullet],
    pub markdown: &'a str,
}

impl<'a> DraftPayload<'a> {
    /// Assemble a payload from the pieces of a generated draft
    pub fn new(
        context: &'a DraftContext,
        options: &'a DraftOptions,
        stats: Stats,
        sections: &'a Sections,
        items: &'a [Bullet],
        markdown: &'a str,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            repo: RepoInfo {
                name: context.repo_name.clone(),
            },
            range: &context.range,
            options,
            stats,
            sections,
            items,
            markdown,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
