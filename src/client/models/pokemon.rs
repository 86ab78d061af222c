//! Pokemon models

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A single catalog entry.
///
/// Entries are plain values: two entries describe the same species when their
/// `id` matches, regardless of the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number (always positive)
    pub id: u32,

    /// Display name, e.g. `bulbasaur`
    pub name: String,

    /// Link to the full resource on the catalog API
    pub url: String,
}

impl Pokemon {
    /// Whether `other` refers to the same species.
    pub fn same_species(&self, other: &Pokemon) -> bool {
        self.id == other.id
    }
}

/// Paged list envelope returned by `/api/v2/pokemon`
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResourceList {
    /// Total number of resources known to the API
    #[serde(default)]
    pub count: u64,

    /// Resources in this page
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// `{ name, url }` reference as returned by list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Extract the numeric id from a resource URL.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` yields `Some(25)`. Zero and
/// non-numeric trailing segments yield `None`.
pub fn id_from_resource_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .filter(|id| *id > 0)
}

impl TryFrom<NamedResource> for Pokemon {
    type Error = ApiError;

    fn try_from(resource: NamedResource) -> Result<Self, Self::Error> {
        if resource.name.trim().is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "Catalog entry without a name: {}",
                resource.url
            )));
        }

        let id = id_from_resource_url(&resource.url).ok_or_else(|| {
            ApiError::InvalidResponse(format!(
                "Cannot determine id of '{}' from {}",
                resource.name, resource.url
            ))
        })?;

        Ok(Pokemon {
            id,
            name: resource.name,
            url: resource.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_resource_url() {
        assert_eq!(
            id_from_resource_url("https://pokeapi.co/api/v2/pokemon/25/"),
            Some(25)
        );
        assert_eq!(
            id_from_resource_url("https://pokeapi.co/api/v2/pokemon/151"),
            Some(151)
        );
    }

    #[test]
    fn test_id_from_resource_url_rejects_garbage() {
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(id_from_resource_url("https://pokeapi.co/api/v2/pokemon/0/"), None);
        assert_eq!(id_from_resource_url(""), None);
    }

    #[test]
    fn test_pokemon_from_named_resource() {
        let resource = NamedResource {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
        };

        let pokemon = Pokemon::try_from(resource).unwrap();

        assert_eq!(pokemon.id, 1);
        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.url, "https://pokeapi.co/api/v2/pokemon/1/");
    }

    #[test]
    fn test_pokemon_from_named_resource_without_id() {
        let resource = NamedResource {
            name: "missingno".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/".to_string(),
        };

        let err = Pokemon::try_from(resource).unwrap_err();
        assert!(err.to_string().contains("missingno"));
    }

    #[test]
    fn test_pokemon_from_named_resource_without_name() {
        let resource = NamedResource {
            name: " ".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/3/".to_string(),
        };

        assert!(matches!(
            Pokemon::try_from(resource),
            Err(ApiError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_same_species_ignores_other_fields() {
        let a = Pokemon {
            id: 7,
            name: "squirtle".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/7/".to_string(),
        };
        let b = Pokemon {
            id: 7,
            name: "zenigame".to_string(),
            url: String::new(),
        };

        assert!(a.same_species(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_envelope_deserializes() {
        let body = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;

        let list: NamedResourceList = serde_json::from_str(body).unwrap();

        assert_eq!(list.count, 1302);
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[1].name, "ivysaur");
    }
}
