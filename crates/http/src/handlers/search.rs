use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};

use portal_core::SearchHit;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SearchQuery;

/// `GET /api/search?q=`: full-text search across every vertical.
/// Short or empty queries return an empty array, not an error.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHit>>, ApiError> {
    let hits = state.search_service.search(&query.q, query.capped_limit()).await?;
    Ok(Json(hits))
}
