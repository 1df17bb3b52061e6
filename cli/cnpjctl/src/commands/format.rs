//! Format command.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use cnpj::Cnpj;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

use super::CommandContext;

/// Print CNPJs in the display pattern. Incomplete inputs print a prefix.
#[derive(Debug, Args)]
pub struct FormatCommand {
    /// CNPJs to format.
    #[arg(required = true)]
    inputs: Vec<String>,
}

#[derive(Debug, Serialize)]
struct FormatView {
    cnpj: Cnpj,
    formatted: String,
}

impl FormatView {
    fn new(input: &str) -> Self {
        let cnpj = Cnpj::parse(input);
        Self {
            cnpj,
            formatted: cnpj.format(),
        }
    }
}

impl FormatCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<ExitCode> {
        let views: Vec<_> = self.inputs.iter().map(|i| FormatView::new(i)).collect();

        match ctx.format {
            OutputFormat::Json => print_json(&views),
            OutputFormat::Text => {
                for view in &views {
                    println!("{}", view.formatted);
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_formats_complete_and_partial() {
        assert_eq!(FormatView::new("11444777000161").formatted, "11.444.777/0001-61");
        assert_eq!(FormatView::new("11444").formatted, "11.444.");
        assert_eq!(FormatView::new("no digits").formatted, "");
    }

    #[test]
    fn test_view_json() {
        let json = serde_json::to_value(FormatView::new("11.444.777/0001-61")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cnpj": "11444777000161",
                "formatted": "11.444.777/0001-61",
            })
        );
    }
}
