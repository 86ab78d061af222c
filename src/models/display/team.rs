//! Team display models

use colored::Colorize;
use serde::Serialize;

use super::PokemonDisplay;
use crate::cli::OutputFormat;
use crate::client::Pokemon;
use crate::error::Result;
use crate::output::{Formattable, json, table};
use crate::team::{MAX_TEAM_SIZE, ToggleOutcome};

/// A user's team.
#[derive(Debug, Clone, Serialize)]
pub struct TeamDisplay {
    /// Owner of the team
    pub user: String,

    /// Number of members
    pub size: usize,

    /// Maximum number of members
    pub capacity: usize,

    /// Members in insertion order
    pub members: Vec<PokemonDisplay>,
}

impl TeamDisplay {
    pub fn new(user: &str, team: &[Pokemon]) -> Self {
        Self {
            user: user.to_string(),
            size: team.len(),
            capacity: MAX_TEAM_SIZE,
            members: team.iter().map(PokemonDisplay::from).collect(),
        }
    }

    fn heading(&self) -> String {
        format!("Team for {} ({}/{})", self.user, self.size, self.capacity)
    }
}

impl Formattable for TeamDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                if self.members.is_empty() {
                    return Ok(format!("{} is empty.", self.heading()));
                }
                let mut lines = vec![self.heading().bold().to_string()];
                lines.extend(
                    self.members
                        .iter()
                        .enumerate()
                        .map(|(slot, p)| format!("  {}. {}", slot + 1, p.label())),
                );
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.heading(),
                table::format_table_or(&self.members, "Team is empty.")
            )),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Result of toggling one Pokemon in a team.
#[derive(Debug, Clone, Serialize)]
pub struct ToggleDisplay {
    pub user: String,
    pub pokemon: PokemonDisplay,
    /// `added`, `removed` or `team_full`
    pub outcome: &'static str,
    /// Whether the team changed
    pub applied: bool,
    /// Team size after the toggle
    pub size: usize,
    pub capacity: usize,
    #[serde(skip)]
    kind: ToggleOutcome,
}

impl ToggleDisplay {
    pub fn new(user: &str, pokemon: &Pokemon, outcome: ToggleOutcome, size: usize) -> Self {
        let label = match outcome {
            ToggleOutcome::Added => "added",
            ToggleOutcome::Removed => "removed",
            ToggleOutcome::TeamFull => "team_full",
        };

        Self {
            user: user.to_string(),
            pokemon: PokemonDisplay::from(pokemon),
            outcome: label,
            applied: outcome.is_applied(),
            size,
            capacity: MAX_TEAM_SIZE,
            kind: outcome,
        }
    }

    fn message(&self) -> String {
        let name = &self.pokemon.name;
        match self.kind {
            ToggleOutcome::Added => format!(
                "{} Added {} to {}'s team ({}/{})",
                "✓".green(),
                name,
                self.user,
                self.size,
                self.capacity
            ),
            ToggleOutcome::Removed => format!(
                "{} Removed {} from {}'s team ({}/{})",
                "✓".green(),
                name,
                self.user,
                self.size,
                self.capacity
            ),
            ToggleOutcome::TeamFull => format!(
                "{} {}'s team is full ({}/{}); {} was not added",
                "✗".red(),
                self.user,
                self.size,
                self.capacity,
                name
            ),
        }
    }
}

impl Formattable for ToggleDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(self.message()),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
