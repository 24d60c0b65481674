use clap::Parser;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Download one plugin:\n    antibody bundle caarlos0/zsh-pg\n\n\
                   Download from a full git URL:\n    antibody bundle https://github.com/caarlos0/zsh-pg.git\n\n\
                   Download a list from stdin, one per line:\n    antibody bundle < plugins.txt")]
pub struct BundleArgs {
    /// Bundles to download (owner/repo or a full git URL).
    /// With no arguments, reads one bundle per line from stdin.
    pub bundles: Vec<String>,
}
