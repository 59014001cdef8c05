//! Command to parse input and print the resulting store.

use crate::error::CliError;
use crate::utils::{load_store, GlobalOptions, SourceArgs};
use clap::{Args, ValueEnum};
use runconf::ConfigStore;

/// Output format for the parsed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `key=value` line per entry
    Text,
    /// Entries and counters as a JSON object
    Json,
}

/// Parse a file and/or arguments and print the resulting entries.
#[derive(Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not fail when required parameters are missing
    #[arg(long)]
    pub no_verify: bool,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_store(&self.source, global)?;

        if self.no_verify {
            for name in store.missing_required() {
                global
                    .logger
                    .warn(&format!("missing required parameter: {name}"));
            }
        } else {
            store.verify_required()?;
        }

        print!("{}", render(&store, self.format)?);
        Ok(())
    }
}

/// Render the store in the requested format.
pub fn render(store: &ConfigStore, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(store
            .entries()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&store.snapshot())?;
            json.push('\n');
            Ok(json)
        }
    }
}
