//! `AccountDesk` CLI - Command-line interface for the account list editor
//!
//! Provides commands for listing, adding, removing, retyping and editing
//! stored LDAP and local accounts.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let context = util::Context::new(cli.data_dir, cli.config, cli.quiet);

    if let Err(e) = util::init_logging(&context, cli.verbose) {
        if !cli.quiet {
            eprintln!("Warning: {e}");
        }
    }

    let result = commands::dispatch(&context, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
