//! Common test utilities for antibody integration tests

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary bundle home plus a scratch area for fixture remotes
pub struct TestHome {
    /// Temporary directory holding the home and the fixtures
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path handed to the binary via ANTIBODY_HOME
    pub home: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let home = temp.path().join("home");
        Self { temp, home }
    }

    /// Build a fixture repository with one commit under the scratch area
    /// and return its file:// URL
    #[allow(dead_code)]
    pub fn fixture_remote(&self, name: &str) -> String {
        let path = self.temp.path().join("remotes").join(name);
        fs::create_dir_all(&path).expect("Failed to create fixture directory");
        let repo = git2::Repository::init(&path).expect("Failed to init fixture repository");
        fs::write(path.join("plugin.zsh"), "echo plugin\n").expect("Failed to write fixture file");
        commit_all(&repo, "Initial commit");
        format!("file://{}", path.display())
    }

    /// Path of a fixture remote created with `fixture_remote`
    #[allow(dead_code)]
    pub fn remote_path(&self, name: &str) -> PathBuf {
        self.temp.path().join("remotes").join(name)
    }

    /// Count materialized bundle directories (depth two under home)
    #[allow(dead_code)]
    pub fn bundle_dir_count(&self) -> usize {
        let Ok(owners) = fs::read_dir(&self.home) else {
            return 0;
        };
        owners
            .filter_map(std::result::Result::ok)
            .filter(|owner| owner.path().is_dir())
            .flat_map(|owner| {
                fs::read_dir(owner.path())
                    .into_iter()
                    .flatten()
                    .filter_map(std::result::Result::ok)
            })
            .filter(|repo| repo.path().is_dir())
            .count()
    }
}

/// Add a file to an existing fixture repository and commit it
#[allow(dead_code)]
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

/// The antibody binary pointed at a test home
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn antibody_cmd(home: &TestHome) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("antibody").expect("Failed to find binary");
    cmd.env("ANTIBODY_HOME", &home.home);
    cmd
}
