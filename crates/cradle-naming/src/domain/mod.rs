//! Domain layer for the Naming context.

pub mod commands;
pub mod suggestions;
