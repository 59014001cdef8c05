//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, GetCommand, ParseCommand, ValidateCommand};
use clap::{Parser, Subcommand};

/// Parse and inspect registry-validated configuration.
#[derive(Parser)]
#[command(name = "runconf")]
#[command(version, about = "Parse and inspect registry-validated configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a file and/or arguments and print the resulting entries
    Parse(ParseCommand),

    /// Print a single value through a typed accessor
    Get(GetCommand),

    /// Validate a registry declaration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
