use async_trait::async_trait;
use models::Entity;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::storage::entity_store::EntityStore;

/// `Repository` backed by an [`EntityStore`] behind a single `RwLock`.
///
/// All writes go through the write lock, so concurrent callers never see a
/// half-applied mutation. Nothing survives a restart.
pub struct InMemoryRepository<T: Entity> {
    inner: RwLock<EntityStore<T>>,
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { inner: RwLock::new(EntityStore::default()) }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self { inner: RwLock::new(EntityStore::new(initial)) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let store = self.inner.read().await;
        Ok(store.list_all().to_vec())
    }

    async fn get(&self, id: T::Id) -> Result<Option<T>, ServiceError> {
        let store = self.inner.read().await;
        Ok(store.get_by_id(&id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T, ServiceError> {
        let mut store = self.inner.write().await;
        Ok(store.create(entity).clone())
    }

    async fn update(&self, entity: T) -> Result<bool, ServiceError> {
        let mut store = self.inner.write().await;
        Ok(store.update(entity))
    }

    async fn delete(&self, id: T::Id) -> Result<bool, ServiceError> {
        let mut store = self.inner.write().await;
        Ok(store.delete(&id) > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use models::{seed, Employee};
    use uuid::Uuid;

    fn employee(first: &str) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: first.into(),
            last_name: "Tester".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            roles: vec![],
            applied_promocodes_count: 0,
        }
    }

    #[tokio::test]
    async fn in_memory_repository_crud() -> Result<(), anyhow::Error> {
        let repo = InMemoryRepository::new(seed::employees());
        let seeded = repo.list().await?.len();

        let e = employee("Grace");
        let created = repo.create(e.clone()).await?;
        assert_eq!(created, e);
        assert_eq!(repo.list().await?.len(), seeded + 1);
        assert_eq!(repo.get(e.id).await?, Some(e.clone()));

        let mut changed = e.clone();
        changed.email = "grace@navy.mil".into();
        assert!(repo.update(changed.clone()).await?);
        assert_eq!(repo.get(e.id).await?, Some(changed));

        assert!(repo.delete(e.id).await?);
        assert!(!repo.delete(e.id).await?);
        assert_eq!(repo.get(e.id).await?, None);
        assert_eq!(repo.len().await, seeded);
        Ok(())
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() -> Result<(), anyhow::Error> {
        let repo: Arc<InMemoryRepository<Employee>> = Arc::new(InMemoryRepository::default());
        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(employee(&format!("worker{i}"))).await
            }));
        }
        for h in handles {
            h.await??;
        }
        assert_eq!(repo.len().await, 32);
        Ok(())
    }
}
