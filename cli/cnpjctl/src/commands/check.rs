//! Validity check command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use cnpj::{Cnpj, Validity};
use serde::Serialize;
use tracing::debug;

use crate::output::{print_json, validity_label, OutputFormat};

use super::CommandContext;

/// Validate one or more CNPJs, formatted or not.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// CNPJs to check. Anything that is not a digit is ignored.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    input: String,
    cnpj: Cnpj,
    formatted: String,
    valid: bool,
    validity: Validity,
}

impl CheckReport {
    fn new(input: &str) -> Self {
        let cnpj = Cnpj::parse(input);
        let validity = cnpj.validity();
        Self {
            input: input.to_string(),
            cnpj,
            formatted: cnpj.format(),
            valid: validity.is_valid(),
            validity,
        }
    }

    fn reason(&self) -> Option<&'static str> {
        if self.validity.value_missing {
            Some("no digits")
        } else if self.validity.too_short {
            Some("fewer than 14 digits")
        } else if self.validity.type_mismatch {
            Some("check digits do not match")
        } else {
            None
        }
    }
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let reports: Vec<_> = self.inputs.iter().map(|i| CheckReport::new(i)).collect();
        let invalid = reports.iter().filter(|r| !r.valid).count();
        debug!(checked = reports.len(), invalid, "checked CNPJs");

        match ctx.format {
            OutputFormat::Json => print_json(&reports),
            OutputFormat::Text => {
                for report in &reports {
                    match report.reason() {
                        None => println!("{}  {}", report.formatted, validity_label(true)),
                        Some(reason) => println!(
                            "{}  {} ({})",
                            report.input,
                            validity_label(false),
                            reason
                        ),
                    }
                }
            }
        }

        Ok(if invalid == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
