use std::sync::Arc;

use anyhow::Context as _;
use axum::routing::get;
use axum::Router;
use store::ItemStore;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::database::open_store;
use crate::items::{create_item, list_items};
use crate::settings::Settings;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// Build the API router over an item store.
///
/// Cross-origin requests are allowed from anywhere.
pub fn router(store: Arc<dyn ItemStore>) -> Router {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState { store })
}

/// Install the global `tracing` subscriber at the configured level.
pub fn init_tracing(level: &str) {
    let parsed = parse_level(level);
    tracing_subscriber::fmt()
        .with_max_level(parsed.unwrap_or(tracing::Level::INFO))
        .init();
    if parsed.is_none() {
        tracing::warn!("Unrecognised log level {:?}, falling back to info", level);
    }
}

fn parse_level(level: &str) -> Option<tracing::Level> {
    level.parse().ok()
}

/// Open the store, bind the listener and serve until the process exits.
pub async fn launch(settings: Settings) -> anyhow::Result<()> {
    let store = open_store(&settings.database).await;
    let router = router(store);

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
