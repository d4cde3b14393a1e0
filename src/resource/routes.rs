//! Router assembly for one resource family.

use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    routing::{get, post, put},
    Router,
};

use crate::auth::Role;
use crate::middleware::require_role;
use crate::store::EntityStore;

use super::{handlers, Resource, ResourceState};

/// Build the `/api/{path}` router for one resource type.
///
/// The store arrives as an explicit parameter; the role policy is the same
/// for every resource: USER reads, ADMIN writes.
pub fn resource_routes<R: Resource>(store: Arc<dyn EntityStore<R>>) -> Router {
    let state = ResourceState { store };

    let reads = Router::new()
        .route("/all", get(handlers::list::<R>))
        .route("/", get(handlers::get_one::<R>))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_role(Role::User, req, next)
        }));

    let writes = Router::new()
        .route("/post", post(handlers::create::<R>))
        .route(
            "/",
            put(handlers::update::<R>).delete(handlers::delete_one::<R>),
        )
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_role(Role::Admin, req, next)
        }));

    Router::new().nest(
        &format!("/api/{}", R::PATH),
        reads.merge(writes).with_state(state),
    )
}
