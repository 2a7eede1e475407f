//! # HTTP client for the item API
//!
//! The browser talks to the API service at the fixed base URL [`API_URL`].
//! Both calls treat any non-2xx status as a failure; callers decide what to do
//! with the [`RequestError`] (the views only log it).

use store::{Item, NewItem};
use thiserror::Error;

/// Base URL of the API service.
pub const API_URL: &str = "http://localhost:5001/api";

/// A failed or rejected exchange with the API service.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(reqwest::StatusCode),
}

/// URL of the item collection under a base URL.
pub fn items_url(base: &str) -> String {
    format!("{}/items", base.trim_end_matches('/'))
}

/// `GET /items` against [`API_URL`].
pub async fn fetch_items() -> Result<Vec<Item>, RequestError> {
    fetch_items_at(API_URL).await
}

/// `POST /items` against [`API_URL`].
pub async fn create_item(payload: &NewItem) -> Result<Item, RequestError> {
    create_item_at(API_URL, payload).await
}

pub async fn fetch_items_at(base: &str) -> Result<Vec<Item>, RequestError> {
    let response = reqwest::get(items_url(base)).await?;
    if !response.status().is_success() {
        return Err(RequestError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn create_item_at(base: &str, payload: &NewItem) -> Result<Item, RequestError> {
    let response = reqwest::Client::new()
        .post(items_url(base))
        .json(payload)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(RequestError::Status(response.status()));
    }
    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    /// Serve `router` on an ephemeral local port and return its API base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api")
    }

    fn failing_api() -> Router {
        Router::new().route(
            "/api/items",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
                .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
    }

    fn working_api() -> Router {
        Router::new().route(
            "/api/items",
            get(|| async { Json(json!([{"_id": "1", "name": "Pen", "description": "Blue ink"}])) })
                .post(|Json(body): Json<Value>| async move {
                    let mut item = body;
                    item["_id"] = json!("2");
                    (StatusCode::CREATED, Json(item))
                }),
        )
    }

    #[test]
    fn test_items_url() {
        assert_eq!(items_url(API_URL), "http://localhost:5001/api/items");
        assert_eq!(items_url("http://example.test/api/"), "http://example.test/api/items");
    }

    #[tokio::test]
    async fn test_fetch_parses_items() {
        let base = serve(working_api()).await;

        let items = fetch_items_at(&base).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name(), "Pen");
    }

    #[tokio::test]
    async fn test_create_returns_stored_item() {
        let base = serve(working_api()).await;

        let item = create_item_at(&base, &NewItem::new("Mug", "Ceramic")).await.unwrap();
        assert_eq!(item.id, "2");
        assert_eq!(item.name(), "Mug");
        assert_eq!(item.description(), "Ceramic");
    }

    #[tokio::test]
    async fn test_server_error_becomes_status_error() {
        let base = serve(failing_api()).await;

        let err = fetch_items_at(&base).await.unwrap_err();
        assert!(matches!(err, RequestError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));

        let err = create_item_at(&base, &NewItem::new("Pen", "Blue ink"))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(err.to_string(), "server responded with 500 Internal Server Error");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_items_at(&format!("http://{addr}/api")).await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
