//! Pokemon catalog client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pokeapi;

#[cfg(test)]
pub use mock::MockCatalogClient;
pub use models::Pokemon;
pub use pokeapi::PokeApiClient;

/// Source of the Pokemon catalog.
///
/// The team service only ever asks for the full list, so this is the whole
/// surface. Implemented by [`PokeApiClient`] for the real API and by
/// `MockCatalogClient` in tests.
#[async_trait]
pub trait PokemonCatalog: Send + Sync {
    /// Retrieve every catalog entry, in catalog order.
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>>;
}
