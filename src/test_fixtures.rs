//! Test fixtures for reducing test setup duplication.
//!
//! Bundle tests need "remote" repositories to clone from without touching
//! the network; these helpers build local git repositories that serve as
//! clone sources via file:// URLs.

use std::fs;
use std::path::Path;

/// Create a repository with one commit under `dir/remotes/<name>` and
/// return its file:// URL. The extra path segment keeps the derived bundle
/// owner stable across temp directories.
///
/// # Panics
///
/// Panics if the repository cannot be created.
pub fn fixture_remote(dir: &Path, name: &str) -> String {
    let path = dir.join("remotes").join(name);
    fs::create_dir_all(&path).expect("Failed to create fixture directory");
    let repo = git2::Repository::init(&path).expect("Failed to init fixture repository");
    fs::write(path.join("plugin.zsh"), "echo plugin\n").expect("Failed to write fixture file");
    commit_all(&repo, "Initial commit");
    format!("file://{}", path.display())
}

/// Add a file to an existing fixture repository and commit it.
///
/// # Panics
///
/// Panics if the repository cannot be opened or committed to.
pub fn commit_file(repo_path: &Path, file: &str, content: &str) {
    let repo = git2::Repository::open(repo_path).expect("Failed to open fixture repository");
    fs::write(repo_path.join(file), content).expect("Failed to write fixture file");
    commit_all(&repo, "Add file");
}

fn commit_all(repo: &git2::Repository, message: &str) {
    let sig = git2::Signature::now("Test", "test@test.com").expect("Failed to create signature");
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage files");
    index.write().expect("Failed to write index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Failed to commit");
}
