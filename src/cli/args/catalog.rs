//! Catalog argument types for CLI commands

use clap::Args;

/// Catalog arguments shared by commands that fetch the catalog.
///
/// Flatten this into any command that talks to the catalog:
/// ```ignore
/// List {
///     #[command(flatten)]
///     catalog: CatalogArgs,
/// }
/// ```
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogArgs {
    /// Number of Pokemon to fetch (overrides catalog_limit from the config)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,
}

impl CatalogArgs {
    /// Limit to request, falling back to the configured one
    pub fn limit_or(&self, configured: u32) -> u32 {
        self.limit.unwrap_or(configured)
    }
}
