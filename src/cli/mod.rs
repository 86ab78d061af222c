//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod catalog;
pub mod context;
pub mod init;
pub mod session;
pub mod status;

pub use args::{CatalogArgs, OutputFormat};

/// PokeTeam CLI - build Pokemon teams from the PokeAPI catalog
#[derive(Parser, Debug)]
#[command(name = "poketeam")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "POKETEAM_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "POKETEAM_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the catalog API host
    #[arg(long, global = true, env = "POKETEAM_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "POKETEAM_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update the PokeTeam configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Browse the Pokemon catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Build teams interactively (one command per line on stdin)
    #[command(after_help = "\
Session commands:
  catalog            Fetch and show the catalog
  team               Show the current user's team
  toggle <ID|NAME>   Add a Pokemon to the team, or remove it if already there
  clear              Empty the current user's team
  user <ID>          Switch to another user's team
  help               Show this list
  quit               End the session

Teams live for the duration of the session only.")]
    Session {
        /// User whose team to manage (defaults to default_user from the config)
        #[arg(long, short = 'u', env = "POKETEAM_USER", hide_env = true)]
        user: Option<String>,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   poketeam completion bash > /etc/bash_completion.d/poketeam
  zsh:    poketeam completion zsh > \"${fpath[1]}/_poketeam\"
  fish:   poketeam completion fish > ~/.config/fish/completions/poketeam.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List Pokemon from the catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}
