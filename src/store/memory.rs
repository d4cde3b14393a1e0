//! In-memory storage backend.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{Entity, EntityStore, StoreResult};

/// In-memory implementation of [`EntityStore`].
///
/// Rows live in a `DashMap` keyed by id, so individual reads and writes are
/// atomic without an outer lock. Ids are handed out from an atomic sequence
/// starting at 1; saving an entity with an explicit id advances the sequence
/// past it so assigned and client-supplied ids never collide.
#[derive(Debug)]
pub struct MemoryStore<E> {
    rows: DashMap<i64, E>,
    next_id: AtomicI64,
}

impl<E> MemoryStore<E> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn find_all(&self) -> StoreResult<Vec<E>> {
        let mut all: Vec<E> = self.rows.iter().map(|row| row.value().clone()).collect();
        // DashMap iteration order is arbitrary; sort for stable listings
        all.sort_by_key(|e| e.id());
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<E>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn save(&self, mut entity: E) -> StoreResult<E> {
        if entity.id() == 0 {
            entity.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        } else {
            self.next_id.fetch_max(entity.id() + 1, Ordering::SeqCst);
        }
        self.rows.insert(entity.id(), entity.clone());
        Ok(entity)
    }

    async fn delete(&self, entity: &E) -> StoreResult<()> {
        self.rows.remove(&entity.id());
        Ok(())
    }
}
