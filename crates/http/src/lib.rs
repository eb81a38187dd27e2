//! HTTP API server for the portal.
//!
//! Read-only page surface: verticals, listings, item pages with selected
//! tiles, and search. Data-layer absences degrade to typed 404/empty JSON
//! responses; nothing here is fatal to the process.

pub mod api_error;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use tower_http::cors::CorsLayer;

use portal_service::{ItemService, SearchService};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub item_service: Arc<ItemService>,
    pub search_service: Arc<SearchService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/verticals", get(handlers::verticals::list_verticals))
        .route("/api/search", get(handlers::search::search))
        .route("/api/{vertical}", get(handlers::items::list_items))
        .route("/api/{vertical}/{slug}", get(handlers::items::get_item_page))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
