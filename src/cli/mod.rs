//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - bundle: Bundle command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bundle;
pub mod completions;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;

/// Antibody - shell plugin manager
///
/// Downloads shell plugins into a local home directory and keeps them up to
/// date.
#[derive(Parser, Debug)]
#[command(
    name = "antibody",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "A fast shell plugin manager",
    long_about = "Antibody downloads shell plugins into a local home directory and can later \
                  refresh all of them in one pass.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  antibody bundle caarlos0/zsh-pg   \x1b[90m# Download one plugin\x1b[0m\n   \
                  antibody bundle < plugins.txt     \x1b[90m# Download a list, one per line\x1b[0m\n   \
                  antibody update                   \x1b[90m# Refresh everything\x1b[0m\n   \
                  antibody list                     \x1b[90m# Show what is downloaded\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Bundle home directory (defaults to ~/.antibody/)
    #[arg(long, global = true, env = "ANTIBODY_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download bundles and print their local paths
    Bundle(BundleArgs),

    /// Refresh every downloaded bundle from its remote
    Update,

    /// List downloaded bundles
    List,

    /// Print the bundle home directory
    Home,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
