//! Cradle: Naming bounded context.
//!
//! Responsible for asking a language model for child name suggestions that
//! match a free-form description, and for turning its reply (structured or
//! not) into a short list of names with an explanation.

pub mod application;
pub mod domain;
