//! Domain layer for the Imagery context.

pub mod commands;
pub mod pool;
pub mod progression;
pub mod prompts;
pub mod selector;
