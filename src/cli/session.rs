//! Team-building session
//!
//! Teams only live as long as the process, so team commands run inside a
//! session that reads one command per line. The same loop serves an
//! interactive terminal (with a prompt) and piped scripts (without one).

use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;

use colored::Colorize;
use log::debug;

use crate::cli::CatalogArgs;
use crate::cli::args::GlobalOptions;
use crate::cli::catalog::fetch_spinner;
use crate::cli::context::CommandContext;
use crate::cli::OutputFormat;
use crate::client::{Pokemon, PokemonCatalog};
use crate::error::{Error, Result};
use crate::models::display::{CatalogDisplay, TeamDisplay, ToggleDisplay};
use crate::output::Formattable;
use crate::team::TeamService;

const HELP: &str = "\
Commands:
  catalog            Fetch and show the catalog
  team               Show the current user's team
  toggle <ID|NAME>   Add a Pokemon to the team, or remove it if already there
  clear              Empty the current user's team
  user <ID>          Switch to another user's team
  help               Show this list
  quit               End the session";

/// Run the session command against stdin/stdout
pub async fn run(opts: &GlobalOptions, user: Option<String>, args: &CatalogArgs) -> Result<()> {
    let ctx = CommandContext::new(opts, args)?;
    let user = user.or_else(|| ctx.config.default_user.clone());

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("{}", "PokeTeam session".bold());
        match &user {
            Some(user) => println!("Managing {}'s team. Type 'help' for commands.\n", user.bold()),
            None => println!("No user selected yet. Start with 'user <ID>', or type 'help'.\n"),
        }
    }

    let mut session = Session::new(ctx.service, ctx.format, user, interactive);
    let mut stdout = std::io::stdout();
    session.run(stdin.lock(), &mut stdout).await
}

/// A single line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Catalog,
    Team,
    Toggle(String),
    Clear,
    User(String),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "catalog" | "list" => SessionCommand::Catalog,
            "team" | "show" => SessionCommand::Team,
            "toggle" | "t" => SessionCommand::Toggle(required(rest, "toggle <ID|NAME>")?),
            "clear" => SessionCommand::Clear,
            "user" => SessionCommand::User(required(rest, "user <ID>")?),
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => {
                return Err(Error::Session(format!(
                    "Unknown command '{}'. Type 'help' for a list of commands.",
                    other
                )));
            }
        };

        Ok(Some(command))
    }
}

fn required(arg: &str, usage: &str) -> Result<String> {
    if arg.is_empty() {
        Err(Error::Session(format!("Usage: {}", usage)))
    } else {
        Ok(arg.to_string())
    }
}

/// Find a catalog entry by id (`25`, `#25`) or case-insensitive name.
pub fn find_pokemon<'a>(catalog: &'a [Pokemon], query: &str) -> Option<&'a Pokemon> {
    let query = query.trim();
    match query.trim_start_matches('#').parse::<u32>() {
        Ok(id) => catalog.iter().find(|p| p.id == id),
        Err(_) => catalog.iter().find(|p| p.name.eq_ignore_ascii_case(query)),
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Session state: the team service, the current user and a catalog lookup.
pub struct Session<C> {
    service: Arc<TeamService<C>>,
    format: OutputFormat,
    user: Option<String>,
    catalog: Option<Vec<Pokemon>>,
    interactive: bool,
}

impl<C: PokemonCatalog> Session<C> {
    pub fn new(
        service: Arc<TeamService<C>>,
        format: OutputFormat,
        user: Option<String>,
        interactive: bool,
    ) -> Self {
        Self {
            service,
            format,
            user,
            catalog: None,
            interactive,
        }
    }

    /// Process commands from `input` until end of input or `quit`.
    ///
    /// A failing command is reported on `out` and the session carries on.
    pub async fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        let mut line = String::new();
        loop {
            if self.interactive {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let flow = match SessionCommand::parse(&line) {
                Ok(Some(command)) => self.execute(command, out).await,
                Ok(None) => Ok(Flow::Continue),
                Err(err) => Err(err),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => writeln!(out, "{} {}", "Error:".red(), err)?,
            }
        }

        debug!("Session ended");
        Ok(())
    }

    fn prompt(&self) -> String {
        match &self.user {
            Some(user) => format!("{}> ", user),
            None => "poketeam> ".to_string(),
        }
    }

    fn require_user(&self) -> Result<&str> {
        self.user.as_deref().ok_or_else(|| {
            Error::Session(
                "No user selected. Use 'user <ID>' or start the session with --user.".to_string(),
            )
        })
    }

    async fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Catalog => {
                let pokemon = self.fetch_catalog().await?;
                writeln!(
                    out,
                    "{}",
                    CatalogDisplay::from(pokemon.clone()).format(self.format)?
                )?;
                self.catalog = Some(pokemon);
            }
            SessionCommand::Team => {
                let user = self.require_user()?;
                let team = self.service.get_user_team(user);
                writeln!(out, "{}", TeamDisplay::new(user, &team).format(self.format)?)?;
            }
            SessionCommand::Toggle(query) => {
                let user = self.require_user()?.to_string();
                let pokemon = self.resolve(&query).await?;
                let outcome = self.service.toggle(&user, &pokemon);
                let size = self.service.get_user_team(&user).len();
                let display = ToggleDisplay::new(&user, &pokemon, outcome, size);
                writeln!(out, "{}", display.format(self.format)?)?;
            }
            SessionCommand::Clear => {
                let user = self.require_user()?;
                self.service.clear_team(user);
                writeln!(out, "{} Cleared team for {}", "✓".green(), user)?;
            }
            SessionCommand::User(user) => {
                writeln!(out, "Now managing {}'s team", user)?;
                self.user = Some(user);
            }
            SessionCommand::Help => writeln!(out, "{}", HELP)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn fetch_catalog(&self) -> Result<Vec<Pokemon>> {
        let spinner = if self.interactive {
            fetch_spinner("Fetching Pokemon catalog...")
        } else {
            None
        };
        let result = self.service.get_catalog_list().await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        result
    }

    /// Look up `query` in the catalog, fetching it on first use.
    async fn resolve(&mut self, query: &str) -> Result<Pokemon> {
        if self.catalog.is_none() {
            let pokemon = self.fetch_catalog().await?;
            debug!("Loaded {} catalog entries for lookup", pokemon.len());
            self.catalog = Some(pokemon);
        }

        let catalog = self.catalog.as_deref().unwrap_or_default();
        find_pokemon(catalog, query).cloned().ok_or_else(|| {
            Error::Session(format!("No Pokemon matching '{}' in the catalog", query))
        })
    }
}
