//! Application layer for the Naming context.

pub mod command_handlers;
