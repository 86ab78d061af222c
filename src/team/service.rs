//! Team service: user team registry plus catalog pass-through

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use log::debug;

use super::{MAX_TEAM_SIZE, ToggleOutcome};
use crate::client::{Pokemon, PokemonCatalog};
use crate::error::Result;

/// Owns the catalog client and every user's team.
///
/// The registry is sparse: a user has an entry only while their team is
/// non-empty, and a missing entry reads as an empty team. Each toggle runs
/// under the map's per-entry guard, so concurrent toggles for one user are
/// serialized while different users proceed in parallel.
pub struct TeamService<C> {
    catalog: C,
    teams: DashMap<String, Vec<Pokemon>>,
}

impl<C: PokemonCatalog> TeamService<C> {
    /// Create a service with an empty registry.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            teams: DashMap::new(),
        }
    }

    /// Fetch the full catalog.
    ///
    /// The catalog client's result, success or failure, is returned as-is.
    pub async fn get_catalog_list(&self) -> Result<Vec<Pokemon>> {
        self.catalog.list_pokemon().await
    }

    /// Current team of `user_id`, in insertion order.
    ///
    /// Unknown users (including the empty id) have an empty team. Never
    /// creates a registry entry.
    pub fn get_user_team(&self, user_id: &str) -> Vec<Pokemon> {
        self.teams
            .get(user_id)
            .map(|team| team.value().clone())
            .unwrap_or_default()
    }

    /// Toggle `pokemon` in the user's team and report what happened.
    ///
    /// Membership is decided by id alone. A present entry is removed even when
    /// the team is full; an absent entry is appended only while the team has
    /// fewer than [`MAX_TEAM_SIZE`] members.
    pub fn toggle(&self, user_id: &str, pokemon: &Pokemon) -> ToggleOutcome {
        let outcome = match self.teams.entry(user_id.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(vec![pokemon.clone()]);
                ToggleOutcome::Added
            }
            Entry::Occupied(mut slot) => {
                let team = slot.get_mut();
                if let Some(pos) = team.iter().position(|m| m.same_species(pokemon)) {
                    team.remove(pos);
                    if team.is_empty() {
                        slot.remove();
                    }
                    ToggleOutcome::Removed
                } else if team.len() >= MAX_TEAM_SIZE {
                    ToggleOutcome::TeamFull
                } else {
                    team.push(pokemon.clone());
                    ToggleOutcome::Added
                }
            }
        };

        debug!(
            "Toggle #{} ({}) for user '{}': {:?}",
            pokemon.id, pokemon.name, user_id, outcome
        );

        outcome
    }

    /// Toggle `pokemon` in the user's team.
    ///
    /// Returns `true` when the team changed and `false` when an addition was
    /// refused because the team is full. The CLI reports through [`toggle`]
    /// instead, since it also needs to say which way the toggle went.
    ///
    /// [`toggle`]: TeamService::toggle
    #[allow(dead_code)]
    pub fn toggle_pokemon_in_team(&self, user_id: &str, pokemon: &Pokemon) -> bool {
        self.toggle(user_id, pokemon).is_applied()
    }

    /// Empty the user's team. Clearing an unknown or empty team is a no-op.
    pub fn clear_team(&self, user_id: &str) {
        let removed = self.teams.remove(user_id).map(|(_, team)| team.len());
        debug!(
            "Cleared team for user '{}' ({} removed, {} active teams)",
            user_id,
            removed.unwrap_or(0),
            self.teams.len()
        );
    }
}
