use std::collections::HashMap;

use models::Entity;

/// Ordered in-memory collection of entities with an id index.
///
/// Entities keep insertion order. `index` maps every stored id to the
/// position of its first occurrence, so lookups behave like a front-to-back
/// scan even if a caller stores duplicate ids.
///
/// No internal synchronization: wrap it (see `InMemoryRepository`) when
/// shared between tasks.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self { items: Vec::new(), index: HashMap::new() }
    }
}

impl<T: Entity> FromIterator<T> for EntityStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        let mut store = Self::default();
        for entity in initial {
            store.create(entity);
        }
        store
    }

    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Append `entity` and return it.
    pub fn create(&mut self, entity: T) -> &T {
        let pos = self.items.len();
        self.index.entry(entity.id().clone()).or_insert(pos);
        self.items.push(entity);
        &self.items[pos]
    }

    /// Replace the first entity sharing `entity`'s id. Returns `false` and
    /// leaves the store untouched when there is no such entity.
    pub fn update(&mut self, entity: T) -> bool {
        match self.index.get(entity.id()) {
            Some(&pos) => {
                self.items[pos] = entity;
                true
            }
            None => false,
        }
    }

    /// Remove every entity with `id`, returning how many were removed.
    pub fn delete(&mut self, id: &T::Id) -> usize {
        if !self.index.contains_key(id) {
            return 0;
        }
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        self.reindex();
        before - self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (pos, entity) in self.items.iter().enumerate() {
            self.index.entry(entity.id().clone()).or_insert(pos);
        }
    }
}
