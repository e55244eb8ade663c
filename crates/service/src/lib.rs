//! Service layer for the employee registry.
//! - `storage` holds the generic in-memory entity store.
//! - `repository` is the async CRUD seam a durable backend would implement.
//! - `employee` shapes requests and responses on top of a repository.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod employee;
