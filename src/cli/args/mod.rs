//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod catalog;
mod common;
mod global;

pub use catalog::CatalogArgs;
pub use common::OutputFormat;
pub use global::GlobalOptions;
