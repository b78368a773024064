// file: src/server/mod.rs
// description: axum router and server bootstrap for the search UI
// reference: https://docs.rs/axum

pub mod handlers;
pub mod state;

pub use state::AppState;

use crate::error::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/more", post(handlers::show_more))
        .route("/health", get(handlers::health))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: Arc<AppState>, host: &str, port: u16) -> Result<()> {
    // Resolve the index up front so a bad store is reported at startup
    if let Some(banner) = state.index.status().await.banner() {
        warn!("Search disabled: {}", banner);
    }

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
