use async_trait::async_trait;
use models::Entity;

use crate::errors::ServiceError;

/// CRUD contract over entities keyed by their identifier.
///
/// Absence is `Ok(None)` / `Ok(false)`, never an error; `Err` is reserved
/// for backends that can actually fail.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, ServiceError>;
    async fn get(&self, id: T::Id) -> Result<Option<T>, ServiceError>;
    /// Stores `entity` as given. Identifier uniqueness is not checked.
    async fn create(&self, entity: T) -> Result<T, ServiceError>;
    /// Replaces the entity with the same id; `false` when there is none.
    async fn update(&self, entity: T) -> Result<bool, ServiceError>;
    /// Removes every entity with `id`; `false` when nothing matched.
    async fn delete(&self, id: T::Id) -> Result<bool, ServiceError>;
}
