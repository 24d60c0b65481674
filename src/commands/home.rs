//! Home command: print the resolved bundle home directory

use std::path::Path;

use crate::error::Result;

/// Run home command
pub fn run(home: &Path) -> Result<()> {
    println!("{}", home.display());
    Ok(())
}
