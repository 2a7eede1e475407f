//! JSON error responses for the item routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use store::StoreError;

pub const ADD_ITEM_FAILED: &str = "Error adding item";
pub const FETCH_ITEMS_FAILED: &str = "Error fetching items";

/// Body of every 500 response: a fixed message plus the store's failure text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

/// A store failure bound to the operation that hit it.
#[derive(Debug)]
pub struct ApiError {
    message: &'static str,
    source: StoreError,
}

impl ApiError {
    pub fn adding(source: StoreError) -> Self {
        Self {
            message: ADD_ITEM_FAILED,
            source,
        }
    }

    pub fn fetching(source: StoreError) -> Self {
        Self {
            message: FETCH_ITEMS_FAILED,
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {}", self.message, self.source);
        let body = ErrorBody {
            message: self.message.to_string(),
            error: self.source.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
