//! cnpj - CLI for checking, formatting and generating CNPJ numbers.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = Config::from_env(cli.output())
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            init_tracing(&config);
            cli.run(&config)
        });

    match result {
        Ok(code) => code,
        Err(e) => {
            error::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing (prefer RUST_LOG, fallback to CNPJ_LOG_LEVEL).
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
