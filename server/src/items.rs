//! Route handlers for `/api/items`.
//!
//! Both handlers forward straight to the [`ItemStore`](store::ItemStore) held
//! in [`AppState`]; neither inspects the fields of an item.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use store::{Item, NewItem};

use crate::application::AppState;
use crate::error::ApiError;

/// `POST /api/items` — store the request body as a new item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    tracing::info!("Received item: {}", body);

    let record = NewItem::from_value(body).map_err(ApiError::adding)?;
    let saved = state.store.insert(record).await.map_err(ApiError::adding)?;

    tracing::info!(id = %saved.id, "Saved item");
    Ok((StatusCode::CREATED, Json(saved)))
}

/// `GET /api/items` — every stored item.
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list_all().await.map_err(ApiError::fetching)?;

    tracing::debug!(count = items.len(), "Fetched items");
    Ok(Json(items))
}
