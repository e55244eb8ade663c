//! Shared building blocks for the employee registry workspace:
//! logging setup, environment helpers and small wire types.

pub mod types;
pub mod utils;
pub mod env;
