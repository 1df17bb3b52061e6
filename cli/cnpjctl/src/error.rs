//! Error display for the CLI.

use colored::Colorize;

use crate::config::ConfigError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(ConfigError::InvalidOutput(_)) = err.downcast_ref::<ConfigError>() {
        eprintln!(
            "\n{}",
            "Hint: unset CNPJ_OUTPUT or pass --output text|json.".yellow()
        );
    }
}
