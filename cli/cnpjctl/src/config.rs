//! Configuration from the environment.
//!
//! - `CNPJ_LOG_LEVEL`: log filter when `RUST_LOG` is unset (default `warn`)
//! - `CNPJ_LOG_JSON`: `1` or `true` for JSON log lines
//! - `CNPJ_OUTPUT`: default output format, `text` or `json`; ignored when
//!   `--output` is given

use thiserror::Error;

use crate::output::OutputFormat;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown output format name.
    #[error("invalid CNPJ_OUTPUT '{0}': expected 'text' or 'json'")]
    InvalidOutput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_json: bool,
    pub output: OutputFormat,
}

impl Config {
    /// Loads the configuration, with `output` taken from the command line
    /// if the flag was passed.
    pub fn from_env(output: Option<OutputFormat>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), output)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, output: Option<OutputFormat>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("CNPJ_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        let log_json = lookup("CNPJ_LOG_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let output = match (output, lookup("CNPJ_OUTPUT")) {
            (Some(flag), _) => flag,
            (None, None) => OutputFormat::default(),
            (None, Some(v)) => match v.to_lowercase().as_str() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(ConfigError::InvalidOutput(v)),
            },
        };

        Ok(Self {
            log_level,
            log_json,
            output,
        })
    }
}
