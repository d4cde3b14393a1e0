pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a storage backend.
///
/// The in-memory backend never fails, but the trait keeps `Result` signatures
/// so a relational backend can slot in behind the same contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A persisted record with a numeric identifier.
///
/// Id `0` means "unset": `save` assigns the next value from the store's
/// sequence before persisting.
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
}

/// Keyed-by-id persistence over one entity type.
///
/// Implementations must be thread-safe and provide atomic per-row operations;
/// no multi-row coordination is offered or expected by callers.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync + 'static {
    /// Every stored entity. Empty vec if none; order is implementation-defined.
    async fn find_all(&self) -> StoreResult<Vec<E>>;

    /// The entity at `id`, or `None`. A miss is not an error.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<E>>;

    /// Insert-or-replace. Assigns an id when the entity's id is unset, and
    /// returns the persisted entity.
    async fn save(&self, entity: E) -> StoreResult<E>;

    /// Remove the record. Callers confirm existence first.
    async fn delete(&self, entity: &E) -> StoreResult<()>;
}
