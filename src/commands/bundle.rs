//! Bundle command: download one or many bundles
//!
//! With explicit arguments each one is downloaded in order; with none, a
//! line-delimited bundle list is read from stdin. A failing bundle never
//! aborts the rest of a batch: every failure is reported, and the command
//! fails with an aggregate error naming each one. A single explicit bundle
//! propagates its error directly.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::cli::BundleArgs;
use crate::error::{AntibodyError, Result};

/// Run bundle command
pub fn run(home: &Path, args: BundleArgs) -> Result<()> {
    let sources = if args.bundles.is_empty() {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        split_lines(&input)
    } else {
        args.bundles
    };
    bundle_all(home, &sources)
}

/// Split a line-delimited bundle list, skipping blank lines
fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn bundle_all(home: &Path, sources: &[String]) -> Result<()> {
    let mut failures: Vec<(String, AntibodyError)> = Vec::new();
    for source in sources {
        match download_one(home, source) {
            Ok(path) => println!("{}", path.display()),
            Err(err) => failures.push((source.clone(), err)),
        }
    }

    if failures.is_empty() {
        return Ok(());
    }
    if sources.len() == 1 {
        return Err(failures.remove(0).1);
    }

    for (_, err) in &failures {
        eprintln!("Error: {err}");
    }
    let names = failures
        .iter()
        .map(|(source, _)| source.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(AntibodyError::BundleBatchFailed { names })
}

fn download_one(home: &Path, source: &str) -> Result<PathBuf> {
    Bundle::parse(source)?.download(home)
}
