//! Domain entities for the employee registry.
//!
//! Everything stored by `service` implements [`entity::Entity`]; the
//! store only ever looks at the identifier.

pub mod errors;
pub mod entity;
pub mod role;
pub mod employee;
pub mod seed;

pub use entity::Entity;
pub use employee::Employee;
pub use role::Role;
