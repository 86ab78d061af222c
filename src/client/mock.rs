//! Mock Pokemon catalog for testing
//!
//! Provides a mock implementation of [`PokemonCatalog`] for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::PokemonCatalog;
use super::models::Pokemon;
use crate::error::{ApiError, Result};

/// Mock catalog client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
/// Clones share state, so a test can keep one handle for assertions while
/// the service owns another.
///
/// # Example
/// ```ignore
/// let mock = MockCatalogClient::new()
///     .with_pokemon(vec![PokemonBuilder::new(1).build()])
///     .await;
///
/// let list = mock.list_pokemon().await?;
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockCatalogClient {
    /// Entries to return from list_pokemon
    pokemon: Arc<Mutex<Vec<Pokemon>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Number of list_pokemon calls
    calls: Arc<Mutex<usize>>,
}

impl MockCatalogClient {
    /// Create a new mock with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entries returned by list_pokemon
    pub async fn with_pokemon(self, pokemon: Vec<Pokemon>) -> Self {
        *self.pokemon.lock().await = pokemon;
        self
    }

    /// Make the next call fail with `error`
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Number of times list_pokemon was called
    pub async fn call_count(&self) -> usize {
        *self.calls.lock().await
    }
}

#[async_trait]
impl PokemonCatalog for MockCatalogClient {
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>> {
        *self.calls.lock().await += 1;

        if let Some(err) = self.error.lock().await.take() {
            return Err(err.into());
        }

        Ok(self.pokemon.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::PokemonBuilder;

    #[tokio::test]
    async fn test_mock_returns_configured_pokemon() {
        let mock = MockCatalogClient::new().with_pokemon(vec![
            PokemonBuilder::new(1).name("bulbasaur").build(),
            PokemonBuilder::new(4).name("charmander").build(),
        ])
        .await;

        let list = mock.list_pokemon().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].name, "charmander");
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn test_mock_error_is_consumed_once() {
        let mock = MockCatalogClient::new()
            .with_pokemon(vec![PokemonBuilder::new(1).build()])
            .await
            .with_error(ApiError::Network("offline".to_string()))
            .await;

        assert!(mock.list_pokemon().await.is_err());
        assert_eq!(mock.list_pokemon().await.unwrap().len(), 1);
        assert_eq!(mock.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let mock = MockCatalogClient::new();
        let handle = mock.clone();

        mock.list_pokemon().await.unwrap();

        assert_eq!(handle.call_count().await, 1);
    }
}
