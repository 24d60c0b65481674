//! Antibody - shell plugin manager
//!
//! Downloads shell plugins (git repositories named owner/repo) into a local
//! home directory and refreshes all of them on demand.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod error;
mod git;
mod home;
mod progress;
mod store;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // The home directory is the one process-scoped setting; resolve it once
    // here and pass it explicitly everywhere else
    let home = home::resolve(cli.home.clone());

    let result = match cli.command {
        Commands::Bundle(args) => commands::bundle::run(&home, args),
        Commands::Update => commands::update::run(&home),
        Commands::List => commands::list::run(&home),
        Commands::Home => commands::home::run(&home),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
