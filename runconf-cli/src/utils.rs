//! Utility functions for CLI operations.
//!
//! This module provides the input options shared by commands that build a
//! store, and the code that builds and fills it.

use crate::error::CliError;
use clap::Args;
use runconf::{ConfigStore, Logger};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Logger built from `--verbose`, `--quiet` and the environment.
    pub logger: Logger,
}

/// Where a command's registry and input come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Registry declaration file (YAML)
    #[arg(long, value_name = "FILE", env = "RUNCONF_SCHEMA")]
    pub schema: PathBuf,

    /// Configuration file parsed before the arguments
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Arguments to parse, given after `--`
    #[arg(last = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Build a store from the registry declaration and fill it.
///
/// The file, if any, is parsed first so that arguments override it.
pub fn load_store(source: &SourceArgs, global: &GlobalOptions) -> Result<ConfigStore, CliError> {
    let logger = &global.logger;

    let mut store = ConfigStore::builder()
        .registry_file(&source.schema)
        .build()?;
    logger.debug(&format!(
        "Loaded registry from {} ({} names)",
        source.schema.display(),
        store.registry().len()
    ));

    if let Some(ref file) = source.file {
        let stats = store.parse_file(file)?;
        logger.info(&format!(
            "Read {} parameter(s) and {} flag(s) from {}",
            stats.parameters_set,
            stats.flags_set,
            file.display()
        ));
    }

    let stats = store.parse_args(&source.args)?;
    logger.info(&format!(
        "Read {} parameter(s) and {} flag(s) from arguments",
        stats.parameters_set, stats.flags_set
    ));

    store.dump_with(logger);
    Ok(store)
}
