//! Draft command

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::{debug, info, instrument};

use shipnote_core::config::{load_config_or_default, Config};
use shipnote_core::error::GitError;
use shipnote_core::read_changelog;
use shipnote_core::types::{Destination, GroupBy, Preset};
use shipnote_draft::{Draft, DraftContext, DraftGenerator, DraftOptions, RawCommit};
use shipnote_git::{resolve_range, GitRepo, RangeSelector};

use crate::cli::output;
use crate::cli::Cli;

/// Render a markdown devlog draft
#[derive(Debug, Args)]
pub struct DraftCommand {
    /// Repository path
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Base range from the specified tag
    #[arg(long, value_name = "TAG")]
    pub since_tag: Option<String>,

    /// Base range from the specified commit sha/ref
    #[arg(long, value_name = "REV")]
    pub since_commit: Option<String>,

    /// Repository URL for the links section
    #[arg(long, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Release URL for the links section
    #[arg(long, value_name = "URL")]
    pub release_url: Option<String>,

    /// Only include commits with this type (repeatable)
    #[arg(long = "include-type", value_name = "TYPE")]
    pub include_types: Vec<String>,

    /// Exclude commits with this type (repeatable)
    #[arg(long = "exclude-type", value_name = "TYPE")]
    pub exclude_types: Vec<String>,

    /// Only include commits with this scope; `general` matches unscoped commits (repeatable)
    #[arg(long = "include-scope", value_name = "SCOPE")]
    pub include_scopes: Vec<String>,

    /// Exclude commits with this scope (repeatable)
    #[arg(long = "exclude-scope", value_name = "SCOPE")]
    pub exclude_scopes: Vec<String>,

    /// Output preset: short or standard
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Destination tone hint: release, update, social or internal
    #[arg(long)]
    pub destination: Option<Destination>,

    /// Group bullets: none, type or scope
    #[arg(long)]
    pub group_by: Option<GroupBy>,

    /// Cap commit bullets in "What shipped"
    #[arg(long, value_name = "N")]
    pub max_bullets: Option<usize>,

    /// Cap changelog bullets in "What shipped"
    #[arg(long, value_name = "N")]
    pub max_changelog_items: Option<usize>,

    /// In the short preset, keep low-signal release/admin commits
    #[arg(long)]
    pub keep_low_signal: bool,

    /// Title template, supports the {repo} placeholder
    #[arg(long, value_name = "TEMPLATE")]
    pub title_template: Option<String>,

    /// Skip the Validation section
    #[arg(long)]
    pub no_validation: bool,

    /// Skip the Links section
    #[arg(long)]
    pub no_links: bool,

    /// Include the "Why it matters" section
    #[arg(long)]
    pub with_why: bool,

    /// Emit the structured JSON payload (includes markdown)
    #[arg(long)]
    pub json: bool,

    /// Write output to a file, relative paths resolve against --path
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn pick_list(flag: &[String], config: &[String]) -> Vec<String> {
    if flag.is_empty() {
        config.to_vec()
    } else {
        flag.to_vec()
    }
}

impl DraftCommand {
    /// Execute the draft command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(path = %self.path.display(), json = self.json, "executing draft command");

        let repo_path = self.repo_path()?;
        let draft = self.build(&repo_path)?;

        let mut text = if self.json {
            draft.to_json()?
        } else {
            draft.markdown.clone()
        };
        if self.json {
            text.push('\n');
        }

        match &self.output {
            Some(out) => {
                let out_path = if out.is_absolute() {
                    out.clone()
                } else {
                    repo_path.join(out)
                };
                if let Some(parent) = out_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&out_path, &text)?;
                debug!(path = %out_path.display(), bytes = text.len(), "draft written");

                if !cli.quiet {
                    println!("Wrote draft: {}", output::path_style().apply_to(out_path.display()));
                }
            }
            None => print!("{}", text),
        }

        Ok(())
    }

    fn repo_path(&self) -> anyhow::Result<PathBuf> {
        std::fs::canonicalize(&self.path)
            .map_err(|_| GitError::NotARepository(self.path.clone()).into())
    }

    /// Options after applying CLI flag > config file > preset default
    pub fn options(&self, config: &Config) -> DraftOptions {
        let draft = &config.draft;
        let preset = self.preset.or(draft.preset).unwrap_or_default();

        let mut options = DraftOptions::new()
            .with_preset(preset)
            .with_destination(self.destination.or(draft.destination).unwrap_or_default())
            .with_group_by(self.group_by.or(draft.group_by).unwrap_or_default())
            .with_max_bullets(self.max_bullets.or(draft.max_bullets))
            .with_max_changelog_items(self.max_changelog_items.or(draft.max_changelog_items))
            .with_preset_caps()
            .with_include_types(pick_list(&self.include_types, &draft.include_types))
            .with_exclude_types(pick_list(&self.exclude_types, &draft.exclude_types))
            .with_include_scopes(pick_list(&self.include_scopes, &draft.include_scopes))
            .with_exclude_scopes(pick_list(&self.exclude_scopes, &draft.exclude_scopes))
            .with_keep_low_signal(self.keep_low_signal || draft.keep_low_signal)
            .with_skip_validation(self.no_validation || draft.skip_validation)
            .with_skip_links(self.no_links || draft.skip_links)
            .with_why(self.with_why || draft.with_why)
            .with_range_selectors(self.since_tag.clone(), self.since_commit.clone());

        if let Some(template) = self.title_template.as_ref().or(draft.title_template.as_ref()) {
            options = options.with_title_template(template.as_str());
        }
        if let Some(url) = self.repo_url.as_ref().or(config.links.repo_url.as_ref()) {
            options = options.with_repo_url(url.as_str());
        }
        if let Some(url) = self.release_url.as_ref().or(config.links.release_url.as_ref()) {
            options = options.with_release_url(url.as_str());
        }

        options
    }

    /// Collect history and generate the draft for `repo_path`
    #[instrument(skip_all, fields(repo = %repo_path.display()))]
    pub fn build(&self, repo_path: &Path) -> anyhow::Result<Draft> {
        let repo = GitRepo::discover(repo_path)?;

        let mut selector = RangeSelector::new();
        if let Some(tag) = &self.since_tag {
            selector = selector.with_tag(tag.as_str());
        }
        if let Some(rev) = &self.since_commit {
            selector = selector.with_commit(rev.as_str());
        }
        let range = resolve_range(&repo, &selector)?;

        let commits: Vec<RawCommit> = repo
            .commits_in_range(&range)?
            .into_iter()
            .map(|c| RawCommit::new(c.hash.clone(), c.full_message()))
            .collect();

        let (config, config_path) = load_config_or_default(repo_path)?;
        if let Some(path) = &config_path {
            debug!(config = %path.display(), "using config file");
        }
        let options = self.options(&config);

        let changelog_path = repo_path.join(&config.changelog.file);
        let changelog = read_changelog(&changelog_path)?;

        let repo_name = repo_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "repo".to_string());
        let context = DraftContext::new(repo_name, range);

        Ok(DraftGenerator::new().generate(&commits, changelog.as_deref(), &options, &context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use git2::{Oid, Repository, Signature};
    use tempfile::TempDir;

    fn init_repo() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        (temp, repo)
    }

    fn commit(repo: &Repository, dir: &Path, message: &str) -> Oid {
        std::fs::write(dir.join("notes.txt"), message).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new("notes.txt")).unwrap();
        index.write().unwrap();

        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn tag(repo: &Repository, name: &str, oid: Oid) {
        let target = repo.find_commit(oid).unwrap();
        repo.tag_lightweight(name, target.as_object(), false).unwrap();
    }

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ship-note", "--quiet", "draft"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn command(cli: &Cli) -> &DraftCommand {
        match &cli.command {
            crate::cli::Commands::Draft(cmd) => cmd,
            other => panic!("expected draft command, got {:?}", other),
        }
    }

    fn try_draft_for(dir: &Path, args: &[&str]) -> anyhow::Result<Draft> {
        let mut all = vec!["--path", dir.to_str().unwrap()];
        all.extend_from_slice(args);
        let cli = parse(&all);
        command(&cli).build(&std::fs::canonicalize(dir).unwrap())
    }

    fn draft_for(dir: &Path, args: &[&str]) -> Draft {
        try_draft_for(dir, args).unwrap()
    }

    fn shipped(draft: &Draft) -> Vec<String> {
        draft.sections.what_shipped.clone()
    }

    /// Repo with a tagged first commit and three commits on top
    fn sample_repo() -> (TempDir, Repository) {
        let (temp, repo) = init_repo();
        let first = commit(&repo, temp.path(), "chore: initial import");
        tag(&repo, "v0.1.0", first);
        commit(&repo, temp.path(), "feat(api): add search endpoint");
        commit(&repo, temp.path(), "chore: bump deps");
        commit(&repo, temp.path(), "docs: update changelog");
        (temp, repo)
    }

    #[test]
    fn test_short_preset_end_to_end() {
        let (temp, _repo) = sample_repo();
        let draft = draft_for(temp.path(), &["--preset", "short"]);

        assert_eq!(shipped(&draft), vec!["- add search endpoint"]);
        assert_eq!(draft.stats.raw_commit_count, 3);
        assert_eq!(draft.context.range.range_spec, "v0.1.0..HEAD");
        assert!(!draft.markdown.contains("## Validation"));
    }

    #[test]
    fn test_standard_preset_lists_newest_first() {
        let (temp, _repo) = sample_repo();
        let draft = draft_for(temp.path(), &[]);

        assert_eq!(
            shipped(&draft),
            vec!["- update changelog", "- bump deps", "- add search endpoint"]
        );
        assert!(draft.markdown.contains("## Validation"));
        assert!(!draft.markdown.contains("## Links"));
    }

    #[test]
    fn test_since_commit_and_changelog_carryover() {
        let (temp, _repo) = sample_repo();
        std::fs::write(
            temp.path().join("CHANGELOG.md"),
            "# Changelog\n\n## 0.2.0\n- Update changelog\n- Faster startup\n\n## 0.1.0\n- Old\n",
        )
        .unwrap();

        let draft = draft_for(temp.path(), &["--since-commit", "HEAD~1"]);
        assert_eq!(shipped(&draft), vec!["- update changelog", "- Faster startup"]);
        assert_eq!(draft.stats.changelog_items_used, 1);
    }

    #[test]
    fn test_empty_range_suppresses_changelog() {
        let (temp, repo) = init_repo();
        let head = commit(&repo, temp.path(), "feat: first");
        tag(&repo, "v1.0.0", head);
        std::fs::write(temp.path().join("CHANGELOG.md"), "## 1.0.0\n- Added X\n- Fixed Y\n").unwrap();

        let draft = draft_for(temp.path(), &[]);
        assert_eq!(draft.stats.raw_commit_count, 0);
        assert!(draft.items.is_empty());
        assert_eq!(
            shipped(&draft),
            vec!["- No commits or changelog bullets found for selected range."]
        );
    }

    #[test]
    fn test_group_by_scope() {
        let (temp, repo) = init_repo();
        commit(&repo, temp.path(), "chore: tidy");
        commit(&repo, temp.path(), "fix(ui): align header");
        commit(&repo, temp.path(), "feat(api): add search");

        let draft = draft_for(temp.path(), &["--group-by", "scope"]);
        assert_eq!(
            shipped(&draft),
            vec!["- [api]", "  - add search", "- [ui]", "  - align header", "- [general]", "  - tidy"]
        );
    }

    #[test]
    fn test_config_file_and_flag_precedence() {
        let (temp, _repo) = sample_repo();
        std::fs::write(
            temp.path().join("shipnote.toml"),
            "[draft]\npreset = \"short\"\nmax_bullets = 2\ntitle_template = \"# {repo} notes\"\n\n[links]\nrepo_url = \"https://example.com/demo\"\n",
        )
        .unwrap();

        let draft = draft_for(temp.path(), &[]);
        assert_eq!(draft.options.preset, Preset::Short);
        assert_eq!(draft.options.max_bullets, Some(2));
        assert_eq!(draft.options.max_changelog_items, Some(4));
        assert!(draft.sections.title.ends_with(" notes"));
        assert_eq!(draft.sections.links, vec!["- Repo: https://example.com/demo"]);

        let draft = draft_for(temp.path(), &["--preset", "standard", "--max-bullets", "1", "--no-links"]);
        assert_eq!(draft.options.preset, Preset::Standard);
        assert_eq!(draft.options.max_changelog_items, Some(6));
        assert_eq!(shipped(&draft), vec!["- update changelog"]);
        assert!(draft.sections.links.is_empty());
    }

    #[test]
    fn test_invalid_config_is_error() {
        let (temp, _repo) = sample_repo();
        std::fs::write(temp.path().join("shipnote.toml"), "[draft]\npreset = \"loud\"\n").unwrap();

        let err = try_draft_for(temp.path(), &[]).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_conflicting_selectors_are_git_errors() {
        let (temp, _repo) = sample_repo();
        let err = try_draft_for(temp.path(), &["--since-tag", "v0.1.0", "--since-commit", "HEAD~1"])
            .unwrap_err();
        assert!(err.to_string().contains("Use only one of"));
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::GIT_ERROR);
    }

    #[test]
    fn test_not_a_repository() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");
        let err = parse(&["--path", missing.to_str().unwrap()]).execute().unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::GIT_ERROR);
    }

    #[test]
    fn test_writes_markdown_output_relative_to_repo() {
        let (temp, _repo) = sample_repo();
        parse(&[
            "--path",
            temp.path().to_str().unwrap(),
            "--title-template",
            "# demo",
            "--output",
            "notes/draft.md",
        ])
        .execute()
        .unwrap();

        let written = std::fs::read_to_string(temp.path().join("notes/draft.md")).unwrap();
        assert!(written.starts_with("# demo\n\n## What shipped\n"));
        assert!(written.ends_with("- Secret scan: <fill>\n"));
    }

    #[test]
    fn test_writes_json_output() {
        let (temp, _repo) = sample_repo();
        parse(&[
            "--path",
            temp.path().to_str().unwrap(),
            "--json",
            "--with-why",
            "--exclude-type",
            "docs",
            "--output",
            "draft.json",
        ])
        .execute()
        .unwrap();

        let written = std::fs::read_to_string(temp.path().join("draft.json")).unwrap();
        assert!(written.ends_with("}\n"));
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["schema_version"], "1.0");
        assert_eq!(json["range"]["base_ref"], "v0.1.0");
        assert_eq!(json["options"]["exclude_types"], serde_json::json!(["docs"]));
        assert_eq!(json["stats"]["selected_commit_count"], 2);
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert!(json["markdown"].as_str().unwrap().contains("## Why it matters"));
    }
}
