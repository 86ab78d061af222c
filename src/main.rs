//! PokeTeam CLI - build Pokemon teams from the PokeAPI catalog

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod team;

use cli::args::GlobalOptions;
use cli::{CatalogCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` applies as usual; `--debug` turns on debug
/// output for this crate on top of it.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("poketeam", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);
    log::debug!("Global options: {:?}", opts);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("poketeam version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Catalog(CatalogCommands::List { catalog }) => {
            cli::catalog::list(&opts, &catalog).await
        }
        Commands::Session { user, catalog } => cli::session::run(&opts, user, &catalog).await,
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "poketeam",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
