//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, format resolution, and service construction.

use std::sync::Arc;

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::{CatalogArgs, OutputFormat};
use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::team::TeamService;

/// Context for command execution containing config, service, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults if no file exists)
    pub config: Config,
    /// Team service backed by the PokeAPI client
    pub service: Arc<TeamService<PokeApiClient>>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// This handles:
    /// - Loading config from path (or default location), tolerating a missing file
    /// - Resolving the output format (flag > config > default)
    /// - Applying the API host and catalog limit overrides
    /// - Creating the catalog client and the team service around it
    ///
    /// # Errors
    /// Returns error if the config file is malformed or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions, catalog: &CatalogArgs) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let format = OutputFormat::resolve(opts.format, &config)?;

        let api_host = opts.api_host_ref().or(config.api_host.as_deref());
        let limit = catalog.limit_or(config.catalog_limit);
        let client = catalog_client(api_host, limit)?;
        debug!("Catalog host {} (limit {})", client.base_url(), limit);

        let service = Arc::new(TeamService::new(client));

        Ok(Self {
            config,
            service,
            format,
        })
    }
}

/// Catalog client for `api_host`, or for the public PokeAPI when none is set.
fn catalog_client(api_host: Option<&str>, limit: u32) -> Result<PokeApiClient> {
    match api_host {
        Some(host) => PokeApiClient::with_host(Some(host.to_string()), limit),
        None => PokeApiClient::new(limit),
    }
}
