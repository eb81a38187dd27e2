use std::sync::Arc;

use axum::{Json, extract::State};

use portal_core::Vertical;

use crate::AppState;
use crate::api_error::ApiError;

/// `GET /api/verticals`: every vertical with its capability list.
pub async fn list_verticals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Vertical>>, ApiError> {
    let verticals = state.item_service.list_verticals().await?;
    Ok(Json(verticals))
}
