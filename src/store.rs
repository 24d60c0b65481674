//! Enumeration and bulk refresh of downloaded bundles
//!
//! Bundles live at `home/<owner>/<repo>`; the store reads that layout back
//! into bundle identifiers and drives the update-all pass over them.

use std::path::Path;

use walkdir::WalkDir;

use crate::bundle::Bundle;
use crate::error::AntibodyError;

/// List every bundle downloaded under the home directory.
///
/// Each depth-two directory is reinterpreted as its two-segment identifier,
/// sorted by name. A missing or empty home is an empty store, not an error.
pub fn list(home: &Path) -> Vec<Bundle> {
    if !home.is_dir() {
        return Vec::new();
    }
    WalkDir::new(home)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_dir())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(home).ok()?;
            let name = relative.to_string_lossy().replace('\\', "/");
            Bundle::parse(&name).ok()
        })
        .collect()
}

/// Result of a bulk refresh: the successfully updated subset, in store
/// order, plus every per-bundle failure.
pub struct UpdateOutcome {
    pub updated: Vec<Bundle>,
    pub failures: Vec<UpdateFailure>,
}

pub struct UpdateFailure {
    pub bundle: Bundle,
    pub error: AntibodyError,
}

impl UpdateOutcome {
    /// Aggregate error naming every failed bundle, or None if all succeeded
    pub fn error(&self) -> Option<AntibodyError> {
        if self.failures.is_empty() {
            return None;
        }
        let names = self
            .failures
            .iter()
            .map(|failure| failure.bundle.name())
            .collect::<Vec<_>>()
            .join(", ");
        Some(AntibodyError::BulkUpdateFailed {
            count: self.failures.len(),
            names,
        })
    }
}

/// Refresh every bundle in the store, invoking `observe` as each one is
/// taken up. A failing bundle never stops the pass; its error is recorded
/// and the remaining bundles are still attempted.
pub fn update_all<F>(home: &Path, mut observe: F) -> UpdateOutcome
where
    F: FnMut(&Bundle),
{
    let mut outcome = UpdateOutcome {
        updated: Vec::new(),
        failures: Vec::new(),
    };
    for bundle in list(home) {
        observe(&bundle);
        match bundle.update(home) {
            Ok(()) => outcome.updated.push(bundle),
            Err(error) => outcome.failures.push(UpdateFailure { bundle, error }),
        }
    }
    outcome
}
