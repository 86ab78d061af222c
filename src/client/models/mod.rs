//! Pokemon catalog data models
//!
//! Wire types returned by PokeAPI and the domain type handed to the rest of
//! the application.

mod pokemon;

pub use pokemon::{NamedResourceList, Pokemon};
