//! PokeAPI client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::PokemonCatalog;
use super::models::{NamedResourceList, Pokemon};
use crate::error::{ApiError, Result};

/// Public PokeAPI host
pub const DEFAULT_API_HOST: &str = "https://pokeapi.co";

/// Number of entries requested when nothing else is configured (generation I)
pub const DEFAULT_CATALOG_LIMIT: u32 = 151;

/// Path of the Pokemon list endpoint
const POKEMON_LIST_PATH: &str = "/api/v2/pokemon";

/// Fair-use ceiling of 100 requests per minute, rounded down per second
const RATE_LIMIT_PER_SECOND: u32 = 1;

/// PokeAPI client
pub struct PokeApiClient {
    http: HttpClient,
    base_url: String,
    limit: u32,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl PokeApiClient {
    /// Create a client against the public PokeAPI host
    pub fn new(limit: u32) -> Result<Self> {
        Self::with_host(None, limit)
    }

    /// Create a client, optionally against a custom host (mirrors, local mocks)
    pub fn with_host(api_host: Option<String>, limit: u32) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("poketeam/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        )
        .allow_burst(NonZeroU32::new(10).unwrap_or(NonZeroU32::MIN));

        let base_url = api_host
            .unwrap_or_else(|| DEFAULT_API_HOST.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            base_url,
            limit,
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a GET request and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.trim().is_empty())
                    .unwrap_or_else(|| path.to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .ok()
                    .filter(|body| !body.trim().is_empty())
                    .unwrap_or_else(|| format!("HTTP {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl PokemonCatalog for PokeApiClient {
    async fn list_pokemon(&self) -> Result<Vec<Pokemon>> {
        let query = [("limit", self.limit.to_string()), ("offset", "0".to_string())];
        let list: NamedResourceList = self.get_json(POKEMON_LIST_PATH, &query).await?;

        debug!(
            "Catalog returned {} of {} entries",
            list.results.len(),
            list.count
        );

        let pokemon = list
            .results
            .into_iter()
            .map(Pokemon::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(pokemon)
    }
}
