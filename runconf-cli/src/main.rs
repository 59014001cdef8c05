//! Main entry point for the runconf CLI.
//!
//! The binary builds a configuration store from a registry declaration and
//! exposes it on the command line:
//! - `parse`: Parse a file and/or arguments and print the entries
//! - `get`: Print one value through a typed accessor
//! - `validate`: Validate a registry declaration file
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use runconf_cli::cli::{Cli, Command};
use runconf_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        logger: runconf::init_logger(cli.verbose, cli.quiet),
    };

    let result = match cli.command {
        Command::Parse(cmd) => cmd.execute(&global),
        Command::Get(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
