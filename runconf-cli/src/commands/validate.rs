//! Command to validate a registry declaration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use runconf::RegistryLoader;
use std::path::PathBuf;

/// Validate a registry declaration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Registry declaration file to validate
    #[arg(value_name = "SCHEMA_PATH")]
    pub schema_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let registry = RegistryLoader::load_file(&self.schema_path)?;
        let required = registry.required().count();
        let parameters = registry.parameters().count();
        let flags = registry.flags().count();

        for name in registry.parameters() {
            global.logger.debug(&format!(
                "parameter -{name}{}",
                if registry.is_required(name) { " (required)" } else { "" }
            ));
        }
        for name in registry.flags() {
            global.logger.debug(&format!("flag --{name}"));
        }

        println!(
            "Registry is valid: {parameters} parameter(s), {required} required, {flags} flag(s)"
        );
        Ok(())
    }
}
