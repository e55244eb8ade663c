//! Storage primitives for the service layer
//!
//! `EntityStore` is the synchronous, unsynchronized container;
//! `InMemoryRepository` puts it behind a lock and the `Repository` trait.

pub mod entity_store;
pub mod in_memory;

pub use entity_store::EntityStore;
pub use in_memory::InMemoryRepository;
