//! Catalog entry display models

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::Pokemon;
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Catalog entry display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PokemonDisplay {
    /// National dex number
    #[tabled(rename = "ID")]
    pub id: u32,

    /// Species name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Catalog resource URL
    #[tabled(rename = "URL")]
    pub url: String,
}

impl PokemonDisplay {
    /// One-line pretty form, e.g. `#025 pikachu`
    pub fn label(&self) -> String {
        format!("#{:03} {}", self.id, self.name)
    }
}

impl From<Pokemon> for PokemonDisplay {
    fn from(pokemon: Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name,
            url: pokemon.url,
        }
    }
}

impl From<&Pokemon> for PokemonDisplay {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id,
            name: pokemon.name.clone(),
            url: pokemon.url.clone(),
        }
    }
}

/// The catalog as returned by the API, in catalog order.
#[derive(Debug, Clone)]
pub struct CatalogDisplay(pub Vec<PokemonDisplay>);

impl From<Vec<Pokemon>> for CatalogDisplay {
    fn from(pokemon: Vec<Pokemon>) -> Self {
        Self(pokemon.into_iter().map(PokemonDisplay::from).collect())
    }
}

impl Formattable for CatalogDisplay {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                if self.0.is_empty() {
                    return Ok("The catalog is empty.".to_string());
                }
                let mut lines = vec![format!("{} Pokemon in the catalog", self.0.len())];
                lines.extend(self.0.iter().map(|p| format!("  {}", p.label())));
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => Ok(table::format_table(&self.0)),
            OutputFormat::Json => Ok(json::format_json_list(&self.0)?),
        }
    }
}
