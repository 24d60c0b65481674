//! Bundle entity: one managed plugin and its download/update operations

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AntibodyError, Result};
use crate::git;

/// One managed plugin, identified by an owner/repo style name and
/// materialized as a git checkout at `home/<owner>/<repo>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    name: String,
    url: String,
}

impl Bundle {
    /// Parse a bundle identifier.
    ///
    /// Supported formats:
    /// - `owner/repo` - GitHub shorthand
    /// - `https://...`, `ssh://...`, `git@host:...`, `file://...` - full git
    ///   URLs, used verbatim; the name is derived from the last two path
    ///   segments of the URL
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if input.contains("://") || input.starts_with("git@") {
            return Ok(Self {
                name: name_from_url(input),
                url: input.to_string(),
            });
        }

        if is_github_shorthand(input) {
            return Ok(Self {
                name: input.to_string(),
                url: format!("https://github.com/{input}.git"),
            });
        }

        Err(AntibodyError::InvalidBundleName {
            name: input.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[allow(dead_code)] // Used by tests
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Deterministic location of this bundle under the home directory
    pub fn local_path(&self, home: &Path) -> PathBuf {
        home.join(&self.name)
    }

    /// Materialize the bundle under `home`, cloning its repository.
    ///
    /// Idempotent: if the local path already exists the clone is skipped and
    /// the path returned as-is. A failed clone removes whatever it created,
    /// so no local state is left behind.
    pub fn download(&self, home: &Path) -> Result<PathBuf> {
        let target = self.local_path(home);
        if target.exists() {
            return Ok(target);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }

        if let Err(err) = git::clone(&self.name, &self.url, &target) {
            remove_failed_clone(&target);
            return Err(err);
        }
        Ok(target)
    }

    /// Refresh an already-downloaded bundle in place from its remote
    pub fn update(&self, home: &Path) -> Result<()> {
        git::pull(&self.name, &self.local_path(home))
    }
}

/// `owner/repo`: exactly two non-empty path segments, no URL syntax
fn is_github_shorthand(input: &str) -> bool {
    if input.contains(':') || input.contains(char::is_whitespace) {
        return false;
    }
    let mut segments = input.split('/');
    matches!(
        (segments.next(), segments.next(), segments.next()),
        (Some(owner), Some(repo), None)
            if !owner.is_empty() && !repo.is_empty() && !owner.starts_with('.')
    )
}

/// Derive an owner/repo name from a git URL
/// (e.g. `https://github.com/caarlos0/zsh-pg.git` -> `caarlos0/zsh-pg`)
fn name_from_url(url: &str) -> String {
    let cleaned = url.trim_end_matches('/').trim_end_matches(".git");
    let after_scheme = match cleaned.find(':') {
        Some(idx) => &cleaned[idx + 1..],
        None => cleaned,
    };
    let segments: Vec<&str> = after_scheme.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [.., owner, repo] => format!("{owner}/{repo}"),
        [repo] => format!("unknown/{repo}"),
        [] => "unknown/unknown".to_string(),
    }
}

/// A failed clone must leave no local state behind
fn remove_failed_clone(target: &Path) {
    if target.exists() {
        let _ = fs::remove_dir_all(target);
    }
    // The owner segment goes too when this was its only bundle
    if let Some(parent) = target.parent() {
        let _ = fs::remove_dir(parent);
    }
}
