//! List command: show downloaded bundles and their paths

use std::path::Path;

use crate::error::Result;
use crate::store;

/// Run list command
pub fn run(home: &Path) -> Result<()> {
    for bundle in store::list(home) {
        println!("{}\t{}", bundle.name(), bundle.local_path(home).display());
    }
    Ok(())
}
