//! # Formsmith - form builder host
//!
//! Serves the Formsmith editor page and exposes the form core over a small
//! JSON API and a command line.
//!
//! ## Architecture
//!
//! - **formsmith-core**: store, rule interpreter, projection, preview and export
//! - **formsmith-ui**: Leptos editor page compiled to wasm
//! - **Adapters**: HTTP handlers and export sinks for the host
//! - **Config**: Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formsmith::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let app = formsmith::create_app();
//!     let listener = tokio::net::TcpListener::bind(
//!         format!("{}:{}", settings.server.host, settings.server.port),
//!     )
//!     .await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;

use crate::adapters::api_handler;
use crate::adapters::health_handler::HealthHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app() -> Router {
    let health_handler = Arc::new(HealthHandler::new());

    let api_router = Router::new()
        .route("/definition/seed", get(api_handler::get_seed_definition))
        .route("/export", post(api_handler::export_definition))
        .route("/rules", post(api_handler::interpret_rules));

    Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .nest("/api", api_router)
        // UI endpoint (catch-all for SPA)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
