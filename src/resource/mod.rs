pub mod handlers;
pub mod routes;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{Entity, EntityStore};

/// One CRUD-exposed entity type.
///
/// The four controllers of this API are a single set of generic handlers
/// instantiated per implementation of this trait; everything that varies
/// between resource types lives here.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    /// Entity type name as it appears in not-found and deleted messages.
    const TYPE_NAME: &'static str;

    /// URL path segment under `/api/`.
    const PATH: &'static str;

    /// Whether callers control ids. When true, create parameters carry an
    /// explicit id and update persists the payload's id verbatim; when false,
    /// the store assigns ids and update keeps the stored one.
    const CLIENT_SUPPLIED_ID: bool;

    /// Query-parameter payload accepted by create.
    type CreateParams: DeserializeOwned + Send + 'static;

    fn from_params(params: Self::CreateParams) -> Self;
}

/// Per-resource handler state. Built once at startup with its store passed in
/// explicitly; handlers never reach for ambient context.
pub struct ResourceState<R: Resource> {
    pub store: Arc<dyn EntityStore<R>>,
}

impl<R: Resource> Clone for ResourceState<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
