//! Bundle home directory resolution
//!
//! The bundle home is one process-scoped setting. It is resolved once at the
//! outermost boundary (from `--home` / `ANTIBODY_HOME`, which clap reads) and
//! passed explicitly into every entry point; nothing deeper reads the
//! environment.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Directory under the user home used when no override is given
const DEFAULT_HOME_DIR: &str = ".antibody";

/// Resolve the bundle home directory.
///
/// Falls back to `~/.antibody/` when no override is given, and to the current
/// directory when the user home cannot be determined. The returned path
/// always ends in exactly one separator, however many the override carried.
pub fn resolve(override_path: Option<PathBuf>) -> PathBuf {
    let base = override_path.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_HOME_DIR)
    });
    with_trailing_separator(&base)
}

fn with_trailing_separator(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let trimmed = raw.trim_end_matches(['/', MAIN_SEPARATOR]);
    PathBuf::from(format!("{trimmed}{MAIN_SEPARATOR}"))
}
