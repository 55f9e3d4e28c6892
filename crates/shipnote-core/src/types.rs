//! Core types for ship-note

use serde::{Deserialize, Serialize};

/// Output preset controlling verbosity and default filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Concise output for chat updates; drops low-signal commits
    Short,
    /// Fuller release notes
    #[default]
    Standard,
}

impl Preset {
    /// Returns the string representation of the preset
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Standard => "standard",
        }
    }

    /// Whether low-signal commits are filtered under this preset
    pub fn filters_low_signal(&self) -> bool {
        matches!(self, Self::Short)
    }

    /// Whether the validation checklist is rendered under this preset
    pub fn includes_validation(&self) -> bool {
        !matches!(self, Self::Short)
    }

    /// Default cap on commit-derived bullets
    pub fn default_max_bullets(&self) -> usize {
        match self {
            Self::Short => 4,
            Self::Standard => 12,
        }
    }

    /// Default cap on changelog-derived bullets
    pub fn default_max_changelog_items(&self) -> usize {
        match self {
            Self::Short => 4,
            Self::Standard => 6,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "standard" => Ok(Self::Standard),
            _ => Err(format!("preset must be one of: short, standard (got '{}')", s)),
        }
    }
}

/// Destination tone hint, used to pick the default title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Release notes
    #[default]
    Release,
    /// Project update
    Update,
    /// Social post
    Social,
    /// Internal brief
    Internal,
}

impl Destination {
    /// Returns the string representation of the destination
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::Update => "update",
            Self::Social => "social",
            Self::Internal => "internal",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "release" => Ok(Self::Release),
            "update" => Ok(Self::Update),
            "social" => Ok(Self::Social),
            "internal" => Ok(Self::Internal),
            _ => Err(format!(
                "destination must be one of: release, update, social, internal (got '{}')",
                s
            )),
        }
    }
}

/// How bullets in "What shipped" are grouped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// Flat list
    #[default]
    None,
    /// Group by commit type
    Type,
    /// Group by commit scope
    Scope,
}

impl GroupBy {
    /// Returns the string representation of the grouping mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Type => "type",
            Self::Scope => "scope",
        }
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "type" => Ok(Self::Type),
            "scope" => Ok(Self::Scope),
            _ => Err(format!("group_by must be one of: none, type, scope (got '{}')", s)),
        }
    }
}

/// A commit range resolved against a repository
///
/// Produced by the git layer, echoed verbatim by drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    /// Exclusive lower bound (tag or revision); `None` means full history
    pub base_ref: Option<String>,
    /// Inclusive upper bound, always `HEAD`
    pub target_ref: String,
    /// Range in `git log` notation
    pub range_spec: String,
}

impl ResolvedRange {
    /// Range from `base` (exclusive) to HEAD
    pub fn since(base: impl Into<String>) -> Self {
        let base = base.into();
        let target_ref = "HEAD".to_string();
        let range_spec = format!("{}..{}", base, target_ref);
        Self {
            base_ref: Some(base),
            target_ref,
            range_spec,
        }
    }

    /// Entire history reachable from HEAD
    pub fn full_history() -> Self {
        Self {
            base_ref: None,
            target_ref: "HEAD".to_string(),
            range_spec: "HEAD".to_string(),
        }
    }
}
