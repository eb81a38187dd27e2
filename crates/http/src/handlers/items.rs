use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use portal_core::{ItemOrder, PortalItem};
use portal_service::ItemPage;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ListQuery;

/// `GET /api/{vertical}/{slug}`: one item page with its selected tiles.
pub async fn get_item_page(
    State(state): State<Arc<AppState>>,
    Path((vertical, slug)): Path<(String, String)>,
) -> Result<Json<ItemPage>, ApiError> {
    let page = state.item_service.get_item_page(&vertical, &slug).await?;
    Ok(Json(page))
}

/// `GET /api/{vertical}`: up to N items ordered by title. An empty
/// collection is a valid response body, not an error.
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Path(vertical): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PortalItem>>, ApiError> {
    let items = state
        .item_service
        .list_items(&vertical, query.capped_limit(), ItemOrder::Title)
        .await?;
    Ok(Json(items))
}
