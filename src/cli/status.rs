//! Status command implementation

use colored::Colorize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "PokeTeam Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "○".dimmed());
            println!(
                "  → Run {} to create one. Using defaults:",
                "poketeam init".cyan()
            );
            Config::default()
        }
        Err(err) => return Err(err),
    };

    println!();

    let host = config.effective_api_host(opts.api_host_ref());
    if opts.api_host.is_some() {
        println!(
            "{} Catalog host: {} {}",
            "✓".green(),
            host,
            "(via --api-host)".dimmed()
        );
    } else {
        println!("{} Catalog host: {}", "✓".green(), host);
    }

    println!("{} Catalog limit: {}", "✓".green(), config.catalog_limit);

    match &config.default_user {
        Some(user) => println!("{} Default user: {}", "✓".green(), user),
        None => {
            println!("{} No default user set", "○".dimmed());
            println!("  → Pass --user to 'poketeam session' or set default_user");
        }
    }

    let format = OutputFormat::resolve(opts.format, &config)?;
    println!("{} Output format: {}", "✓".green(), format.name());
    println!();

    Ok(())
}
