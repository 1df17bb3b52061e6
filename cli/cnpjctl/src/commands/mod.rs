//! CLI commands.

mod check;
mod format;
mod generate;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// cnpj - Check, format and generate CNPJ numbers.
#[derive(Debug, Parser)]
#[command(name = "cnpj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format. Defaults to CNPJ_OUTPUT, then text.
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate CNPJs; exits non-zero if any is invalid.
    Check(check::CheckCommand),

    /// Print CNPJs in the ##.###.###/####-## pattern.
    Format(format::FormatCommand),

    /// Generate random valid CNPJs.
    Generate(generate::GenerateCommand),
}

impl Cli {
    /// The `--output` flag, if given.
    pub fn output(&self) -> Option<OutputFormat> {
        self.output
    }

    /// Run the CLI command.
    pub fn run(self, config: &Config) -> Result<ExitCode> {
        let ctx = CommandContext {
            format: config.output,
        };

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Format(cmd) => cmd.run(&ctx),
            Commands::Generate(cmd) => cmd.run(&ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
