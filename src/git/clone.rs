//! Repository cloning

use std::borrow::Cow;
use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks, Repository, build::RepoBuilder};

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use crate::error::{AntibodyError, Result};

/// Clone a bundle repository into a target directory.
///
/// Supports HTTPS, SSH, and file URLs. Authentication is delegated to git's
/// native credential system (SSH keys, credential helpers, etc.). The error
/// carries the bundle name so batch callers can report which item failed.
pub fn clone(bundle: &str, url: &str, target: &Path) -> Result<Repository> {
    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);

    let mut builder = RepoBuilder::new();
    builder.fetch_options(fetch_options);

    let url_to_clone = normalize_ssh_url(url);
    builder
        .clone(url_to_clone.as_ref(), target)
        .map_err(|e| AntibodyError::FetchFailed {
            bundle: bundle.to_string(),
            reason: interpret_git_error(&e),
        })
}

/// Normalize SCP-style SSH URLs (git@host:path) to ssh:// form.
///
/// libgit2 may have issues with the SCP form, so the explicit ssh:// form is
/// used for cloning.
fn normalize_ssh_url(url: &str) -> Cow<'_, str> {
    if !url.starts_with("git@") {
        return Cow::Borrowed(url);
    }
    match url.split_once(':') {
        Some((host, path)) => {
            let path = path.strip_prefix('/').unwrap_or(path);
            Cow::Owned(format!("ssh://{host}/{path}"))
        }
        None => Cow::Borrowed(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_scp_style_url() {
        assert_eq!(
            normalize_ssh_url("git@github.com:user/repo.git"),
            "ssh://git@github.com/user/repo.git"
        );
    }

    #[test]
    fn test_normalize_scp_style_absolute_path() {
        assert_eq!(
            normalize_ssh_url("git@github.com:/absolute/repo.git"),
            "ssh://git@github.com/absolute/repo.git"
        );
    }

    #[test]
    fn test_https_url_unchanged() {
        assert_eq!(
            normalize_ssh_url("https://github.com/user/repo.git"),
            "https://github.com/user/repo.git"
        );
    }

    #[test]
    fn test_clone_missing_local_repo_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = temp.path().join("checkout");
        let result = clone(
            "user/nope",
            &format!("file://{}", temp.path().join("nope").display()),
            &target,
        );
        match result {
            Ok(_) => panic!("expected clone to fail"),
            Err(e) => assert!(matches!(e, AntibodyError::FetchFailed { .. })),
        }
    }
}
