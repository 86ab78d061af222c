//! Presentation models shared by CLI commands

pub mod display;
