use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    db::{CatalogRepository, InteractionRepository},
    middleware::{make_span_with_request_id, request_id_middleware},
};

pub mod interactions;
pub mod recommendations;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub interactions: Arc<dyn InteractionRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        interactions: Arc<dyn InteractionRepository>,
        config: Config,
    ) -> Self {
        Self {
            catalog,
            interactions,
            config: Arc::new(config),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/recommendations/players",
            get(recommendations::recommend_players),
        )
        .route("/interactions", post(interactions::create_interaction))
}

async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
