//! Route modules organized by bounded context.

pub mod health;
pub mod imagery;
pub mod naming;
