//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::pokeapi::DEFAULT_API_HOST;
use crate::config::{Config, Preferences};
use crate::error::Result;

/// Run the init command
///
/// Existing values are offered as defaults, so re-running init edits the
/// current configuration instead of starting over.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let current = Config::load_or_default_at(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to PokeTeam!".bold().green());
    println!("Let's set up where your Pokemon come from.\n");

    let host_default = current
        .api_host
        .clone()
        .or_else(|| opts.api_host.clone())
        .unwrap_or_else(|| DEFAULT_API_HOST.to_string());
    let api_host: String = Input::with_theme(&theme)
        .with_prompt("Catalog API host")
        .default(host_default)
        .validate_with(|host: &String| -> std::result::Result<(), &str> {
            if host.starts_with("http://") || host.starts_with("https://") {
                Ok(())
            } else {
                Err("Host must start with http:// or https://")
            }
        })
        .interact_text()?;

    let catalog_limit: u32 = Input::with_theme(&theme)
        .with_prompt("How many Pokemon should the catalog list?")
        .default(current.catalog_limit)
        .validate_with(|limit: &u32| -> std::result::Result<(), &str> {
            if *limit > 0 {
                Ok(())
            } else {
                Err("The limit must be at least 1")
            }
        })
        .interact_text()?;

    let default_user: String = Input::with_theme(&theme)
        .with_prompt("Default trainer id (leave empty for none)")
        .default(current.default_user.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let formats = [OutputFormat::Pretty, OutputFormat::Table, OutputFormat::Json];
    let names: Vec<&str> = formats.iter().map(|f| f.name()).collect();
    let current_format = OutputFormat::resolve(None, &current)?;
    let selected = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&names[..])
        .default(formats.iter().position(|f| *f == current_format).unwrap_or(0))
        .interact()?;

    let config = Config {
        api_host: (api_host != DEFAULT_API_HOST).then_some(api_host),
        catalog_limit,
        default_user: Some(default_user.trim().to_string()).filter(|u| !u.is_empty()),
        preferences: Preferences {
            format: Some(formats[selected].name().to_string()),
        },
    };
    config.validate()?;
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    if let Some(user) = &config.default_user {
        println!("  Default user: {}", user.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "poketeam status".cyan());
    println!("  {} - Browse the catalog", "poketeam catalog list".cyan());
    println!("  {} - Build a team", "poketeam session".cyan());

    Ok(())
}
