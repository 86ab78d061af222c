//! Common CLI types shared across commands

use clap::ValueEnum;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts/APIs
    Json,
}

impl OutputFormat {
    /// Resolve the format: CLI flag/env first, then the config preference, then the default.
    pub fn resolve(flag: Option<OutputFormat>, config: &Config) -> Result<Self> {
        if let Some(format) = flag {
            return Ok(format);
        }

        match config.preferences.format.as_deref() {
            Some(name) => OutputFormat::from_str(name, true).map_err(|_| {
                ConfigError::Invalid(format!(
                    "unknown output format '{}' (expected pretty, table or json)",
                    name
                ))
                .into()
            }),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Name as accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    }
}
