//! Test fixtures and builders for catalog model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::Pokemon;

/// First-generation names used when a test doesn't care about the name
const KANTO_STARTERS: [&str; 9] = [
    "bulbasaur",
    "ivysaur",
    "venusaur",
    "charmander",
    "charmeleon",
    "charizard",
    "squirtle",
    "wartortle",
    "blastoise",
];

// ============================================================================
// PokemonBuilder
// ============================================================================

/// Builder for creating test Pokemon instances.
///
/// # Example
/// ```ignore
/// let pikachu = PokemonBuilder::new(25).name("pikachu").build();
/// ```
#[derive(Debug, Clone)]
pub struct PokemonBuilder {
    id: u32,
    name: String,
    url: Option<String>,
}

impl PokemonBuilder {
    /// Create a new builder with the given id.
    ///
    /// Ids 1-9 get their real names; anything else gets `pokemon-<id>`.
    pub fn new(id: u32) -> Self {
        let name = id
            .checked_sub(1)
            .and_then(|idx| KANTO_STARTERS.get(idx as usize))
            .map(|name| name.to_string())
            .unwrap_or_else(|| format!("pokemon-{}", id));

        Self {
            id,
            name,
            url: None,
        }
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the resource URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Build the Pokemon.
    pub fn build(self) -> Pokemon {
        Pokemon {
            url: self
                .url
                .unwrap_or_else(|| format!("https://pokeapi.co/api/v2/pokemon/{}/", self.id)),
            id: self.id,
            name: self.name,
        }
    }
}

/// Build entries for every id in `ids`, in order.
pub fn pokemon_with_ids(ids: impl IntoIterator<Item = u32>) -> Vec<Pokemon> {
    ids.into_iter()
        .map(|id| PokemonBuilder::new(id).build())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let pokemon = PokemonBuilder::new(7).build();

        assert_eq!(pokemon.id, 7);
        assert_eq!(pokemon.name, "squirtle");
        assert_eq!(pokemon.url, "https://pokeapi.co/api/v2/pokemon/7/");
    }

    #[test]
    fn test_builder_fallback_name() {
        let pokemon = PokemonBuilder::new(25).build();
        assert_eq!(pokemon.name, "pokemon-25");
    }

    #[test]
    fn test_builder_overrides() {
        let pokemon = PokemonBuilder::new(25)
            .name("pikachu")
            .url("http://localhost/pikachu")
            .build();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.url, "http://localhost/pikachu");
    }

    #[test]
    fn test_pokemon_with_ids_keeps_order() {
        let ids: Vec<u32> = pokemon_with_ids([3, 1, 2]).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
