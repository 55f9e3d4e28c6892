//! Repository fixtures shared by the crate's tests

use std::path::Path;

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

pub(crate) fn init_repo() -> (TempDir, Repository) {
    let temp = TempDir::new().unwrap();
    let repo = Repository::init(temp.path()).unwrap();
    (temp, repo)
}

/// Write `name` and commit it on HEAD with `message`
pub(crate) fn commit_file(repo: &Repository, dir: &Path, name: &str, message: &str) -> Oid {
    std::fs::write(dir.join(name), message).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();

    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap()
}

pub(crate) fn tag(repo: &Repository, name: &str, oid: Oid) {
    let commit = repo.find_commit(oid).unwrap();
    repo.tag_lightweight(name, commit.as_object(), false)
        .unwrap();
}
