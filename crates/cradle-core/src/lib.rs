//! Cradle Core: shared domain abstractions.
//!
//! This crate defines the traits and types that every bounded context
//! depends on. It contains no infrastructure code.

pub mod asset;
pub mod command;
pub mod error;
pub mod language_model;
