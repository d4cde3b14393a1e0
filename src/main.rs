use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use catalog_api_rust::entities::{AmusementPark, Game, Restaurant, School};
use catalog_api_rust::middleware::jwt_auth_middleware;
use catalog_api_rust::resource::routes::resource_routes;
use catalog_api_rust::store::MemoryStore;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_SECRET, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = catalog_api_rust::config::config();
    tracing::info!("Starting Catalog API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("CATALOG_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Catalog API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Protected resource API
        .merge(api_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// One store per resource family, built here and handed to each router
/// explicitly.
fn api_routes() -> Router {
    Router::new()
        .merge(resource_routes::<AmusementPark>(Arc::new(MemoryStore::new())))
        .merge(resource_routes::<Game>(Arc::new(MemoryStore::new())))
        .merge(resource_routes::<Restaurant>(Arc::new(MemoryStore::new())))
        .merge(resource_routes::<School>(Arc::new(MemoryStore::new())))
        .layer(middleware::from_fn(jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Catalog API (Rust)",
        "version": version,
        "description": "Role-gated CRUD catalog API built with Rust (Axum)",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "amusementparks": "/api/amusementparks (USER read, ADMIN write)",
            "games": "/api/games (USER read, ADMIN write)",
            "restaurants": "/api/restaurants (USER read, ADMIN write)",
            "schools": "/api/schools (USER read, ADMIN write)",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
