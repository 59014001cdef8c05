//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "runconf";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; install hints go to stderr unless quiet.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        if let Some(hint) = install_hint(self.shell) {
            global.logger.warn(&format!("install with: {hint}"));
        }

        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}

/// Where the generated script is usually installed.
fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some(
            "runconf completions bash > ~/.local/share/bash-completion/completions/runconf",
        ),
        Shell::Zsh => Some("runconf completions zsh > ~/.zsh/completions/_runconf"),
        Shell::Fish => Some("runconf completions fish > ~/.config/fish/completions/runconf.fish"),
        Shell::PowerShell => Some("runconf completions powershell >> $PROFILE"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_hints() {
        assert!(install_hint(Shell::Bash).unwrap().contains("bash-completion"));
        assert!(install_hint(Shell::Zsh).unwrap().contains("_runconf"));
        assert!(install_hint(Shell::Elvish).is_none());
    }
}
