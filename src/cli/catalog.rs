//! Catalog command implementations

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::CatalogArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::error::Result;
use crate::models::display::CatalogDisplay;
use crate::output::Formattable;

/// Run the catalog list command
pub async fn list(opts: &GlobalOptions, args: &CatalogArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, args)?;

    let spinner = fetch_spinner("Fetching Pokemon catalog...");
    let result = ctx.service.get_catalog_list().await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let pokemon = result?;
    debug!("Fetched {} catalog entries", pokemon.len());

    CatalogDisplay::from(pokemon).print(ctx.format)
}

/// Spinner on stderr while a catalog request is in flight.
///
/// Returns `None` when stderr is not a terminal so piped output stays clean.
pub fn fetch_spinner(message: &'static str) -> Option<ProgressBar> {
    if !std::io::stderr().is_terminal() {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}
