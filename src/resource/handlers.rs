//! Generic CRUD handlers, instantiated once per [`Resource`] type.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, RawQuery, State},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::Entity;

use super::{Resource, ResourceState};

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: i64,
}

/// GET /api/{resource}/all
pub async fn list<R: Resource>(
    State(state): State<ResourceState<R>>,
) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(state.store.find_all().await?))
}

/// GET /api/{resource}?id={id}
pub async fn get_one<R: Resource>(
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<R>, ApiError> {
    let Query(IdQuery { id }) = query.map_err(|e| ApiError::validation(e.body_text()))?;

    let found = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::entity_not_found(R::TYPE_NAME, id))?;

    Ok(Json(found))
}

/// POST /api/{resource}/post?{field}={value}...
pub async fn create<R: Resource>(
    State(state): State<ResourceState<R>>,
    RawQuery(query): RawQuery,
) -> Result<Json<R>, ApiError> {
    let params = parse_params::<R::CreateParams>(query.as_deref())?;

    let saved = state.store.save(R::from_params(params)).await?;
    tracing::info!("Created {} with id {}", R::TYPE_NAME, saved.id());

    Ok(Json(saved))
}

/// PUT /api/{resource}?id={id} with a full-entity JSON body.
///
/// Full replace, not a merge: the incoming payload overwrites every stored
/// field. The stored id survives unless the resource exposes ids to clients.
pub async fn update<R: Resource>(
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
    body: Result<Json<R>, JsonRejection>,
) -> Result<Json<R>, ApiError> {
    let Query(IdQuery { id }) = query.map_err(|e| ApiError::validation(e.body_text()))?;
    let Json(incoming) = body.map_err(|e| ApiError::validation(e.body_text()))?;

    let current = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::entity_not_found(R::TYPE_NAME, id))?;

    let mut replacement = incoming;
    if !R::CLIENT_SUPPLIED_ID {
        replacement.set_id(current.id());
    }

    let saved = state.store.save(replacement).await?;

    Ok(Json(saved))
}

/// DELETE /api/{resource}?id={id}
pub async fn delete_one<R: Resource>(
    State(state): State<ResourceState<R>>,
    query: Result<Query<IdQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(IdQuery { id }) = query.map_err(|e| ApiError::validation(e.body_text()))?;

    let found = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::entity_not_found(R::TYPE_NAME, id))?;

    state.store.delete(&found).await?;
    tracing::info!("Deleted {} with id {}", R::TYPE_NAME, id);

    Ok(Json(json!({
        "message": format!("{} with id {} deleted", R::TYPE_NAME, id)
    })))
}

fn parse_params<T: DeserializeOwned>(query: Option<&str>) -> Result<T, ApiError> {
    serde_urlencoded::from_str(query.unwrap_or("")).map_err(|e| ApiError::validation(e.to_string()))
}
