//! Cradle: Imagery bounded context.
//!
//! Responsible for turning portrait requests into stable placeholder image
//! URLs: a content-addressed selector over a static candidate pool, and an
//! orchestrator that builds an age progression from repeated selections.

pub mod application;
pub mod domain;
