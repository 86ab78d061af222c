//! Display model implementations for pretty, table and JSON output
//!
//! Display models transform catalog and team data into CLI-friendly formats
//! with appropriate column names and serialization.

mod pokemon;
mod team;

pub use pokemon::{CatalogDisplay, PokemonDisplay};
pub use team::{TeamDisplay, ToggleDisplay};
