//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per item.
    #[default]
    Text,
    /// JSON array of items.
    Json,
}

/// Print items as pretty JSON.
pub fn print_json<T: Serialize>(data: &[T]) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "[]".to_string());
    println!("{}", json);
}

/// Colored "valid"/"invalid" label.
pub fn validity_label(valid: bool) -> String {
    if valid {
        "valid".green().to_string()
    } else {
        "invalid".red().to_string()
    }
}
