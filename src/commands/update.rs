//! Update command: refresh every downloaded bundle
//!
//! Uses partial-failure semantics: every bundle is attempted regardless of
//! earlier failures, refreshed bundles are reported, and any failures turn
//! into a non-zero exit with each offending bundle named.

use std::path::Path;

use console::style;

use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::store;

/// Run update command
pub fn run(home: &Path) -> Result<()> {
    let bundles = store::list(home);
    if bundles.is_empty() {
        println!("Nothing to update");
        return Ok(());
    }

    let progress = ProgressDisplay::new(bundles.len() as u64);
    let outcome = store::update_all(home, |bundle| progress.on_bundle(bundle.name()));
    progress.finish();

    for bundle in &outcome.updated {
        println!("{} {}", style("updated").green(), bundle.name());
    }
    for failure in &outcome.failures {
        eprintln!("{} {}", style("Error:").red().bold(), failure.error);
    }

    match outcome.error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
