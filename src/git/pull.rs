//! In-place refresh of existing checkouts
//!
//! This module handles:
//! - Opening a bundle's local checkout
//! - Fetching from its origin remote
//! - Fast-forwarding the current branch to the fetched head

use std::path::Path;

use git2::{AnnotatedCommit, AutotagOption, FetchOptions, RemoteCallbacks, Repository};

use super::auth::setup_auth_callbacks;
use super::error::interpret_git_error;
use crate::error::{AntibodyError, Result};

/// Fetch from origin and fast-forward the checkout at `path`.
///
/// Already up to date is a success. A checkout whose history has diverged
/// from its remote is left untouched and reported as a failure, as is a
/// directory that is no longer a valid repository.
pub fn pull(bundle: &str, path: &Path) -> Result<()> {
    let repo = Repository::open(path).map_err(|e| {
        update_error(bundle, format!("not a valid checkout: {}", e.message()))
    })?;

    fetch_origin(bundle, &repo)?;

    let fetch_head = repo
        .find_reference("FETCH_HEAD")
        .map_err(|e| update_error(bundle, e.message()))?;
    let fetched = repo
        .reference_to_annotated_commit(&fetch_head)
        .map_err(|e| update_error(bundle, e.message()))?;

    let (analysis, _) = repo
        .merge_analysis(&[&fetched])
        .map_err(|e| update_error(bundle, e.message()))?;

    if analysis.is_up_to_date() {
        return Ok(());
    }
    if !analysis.is_fast_forward() {
        return Err(update_error(
            bundle,
            "local checkout has diverged from its remote",
        ));
    }

    fast_forward(&repo, &fetched).map_err(|e| update_error(bundle, e.message()))
}

fn fetch_origin(bundle: &str, repo: &Repository) -> Result<()> {
    let mut remote = repo
        .find_remote("origin")
        .map_err(|e| update_error(bundle, format!("no origin remote: {}", e.message())))?;

    let mut callbacks = RemoteCallbacks::new();
    setup_auth_callbacks(&mut callbacks);

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(callbacks);
    fetch_options.download_tags(AutotagOption::All);

    // Fetch the branch the checkout is on; fall back to the remote's
    // configured refspecs when HEAD is detached
    let refspecs = current_branch(repo).map_or_else(Vec::new, |branch| vec![branch]);
    remote
        .fetch(&refspecs, Some(&mut fetch_options), None)
        .map_err(|e| update_error(bundle, interpret_git_error(&e)))
}

fn current_branch(repo: &Repository) -> Option<String> {
    let head = repo.head().ok()?;
    if head.is_branch() {
        head.shorthand().map(ToString::to_string)
    } else {
        None
    }
}

fn fast_forward(
    repo: &Repository,
    fetched: &AnnotatedCommit,
) -> std::result::Result<(), git2::Error> {
    let head = repo.head()?;
    let refname = head
        .name()
        .ok_or_else(|| git2::Error::from_str("HEAD name is not valid utf-8"))?
        .to_string();

    let mut reference = repo.find_reference(&refname)?;
    reference.set_target(fetched.id(), "fast-forward")?;
    repo.set_head(&refname)?;

    let mut checkout = git2::build::CheckoutBuilder::new();
    checkout.force();
    repo.checkout_head(Some(&mut checkout))
}

fn update_error(bundle: &str, reason: impl Into<String>) -> AntibodyError {
    AntibodyError::UpdateFailed {
        bundle: bundle.to_string(),
        reason: reason.into(),
    }
}
