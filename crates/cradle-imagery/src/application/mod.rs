//! Application layer for the Imagery context.

pub mod command_handlers;
