//! Web server: the thin UI and the JSON API around the pipeline.
//!
//! # Routes
//!
//! - `GET /` - Embedded single-page UI
//! - `GET /health` - Health check
//! - `PUT /credentials` - Install session credentials
//! - `POST /generate` - Run the three-stage pipeline
//! - `GET /events` - Server-sent progress milestones
//! - `GET /download` - Last article as a markdown attachment
//! - `POST /feedback` - Acknowledge feedback (not persisted)

use crate::error::Result;
use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod routes;
pub mod state;
mod ui;

pub use state::AppState;

/// Create the router with all route definitions.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/health", get(routes::health_check))
        .route("/credentials", put(routes::put_credentials))
        .route("/generate", post(routes::generate))
        .route("/events", get(routes::event_stream))
        .route("/download", get(routes::download))
        .route("/feedback", post(routes::feedback))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Start the server on `bind_address` and serve until shutdown.
pub async fn start_server(bind_address: &str, state: AppState) -> Result<()> {
    let app = create_router(state);

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(address = %bind_address, "pressroom listening");

    axum::serve(listener, app).await?;

    tracing::info!("server stopped");
    Ok(())
}
