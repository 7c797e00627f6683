//! Serves the embedded editor bundle.

use axum::{
    extract::OriginalUri,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_embed::RustEmbed;

use crate::adapters::api_handler::ApiResponse;

/// Bundle produced by `trunk build` in `ui/`.
#[derive(RustEmbed)]
#[folder = "ui/dist"]
#[allow_missing = true]
struct Asset;

const INDEX: &str = "index.html";

pub struct UIHandler;

impl UIHandler {
    /// Fallback for every route the router does not know.
    ///
    /// Unknown `/api` paths get a JSON 404 instead of the editor shell, so API
    /// clients never receive HTML.
    pub async fn serve(OriginalUri(uri): OriginalUri) -> Response {
        let path = uri.path().trim_start_matches('/');

        if path == "api" || path.starts_with("api/") {
            tracing::debug!(path, "Unknown API route");
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::error(format!("No API route for /{}", path))),
            )
                .into_response();
        }

        let path = if path.is_empty() { INDEX } else { path };

        // Editor routes live in the page, so any miss falls back to the shell.
        match Self::asset(path).or_else(|| Self::asset(INDEX)) {
            Some(response) => response,
            None => {
                tracing::debug!(path, "Editor bundle not built; nothing to serve");
                (StatusCode::NOT_FOUND, "Editor bundle not built. Run `trunk build` in ui/.").into_response()
            }
        }
    }

    /// Embedded file at `path` with its guessed content type.
    fn asset(path: &str) -> Option<Response> {
        let content = Asset::get(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Some(([(header::CONTENT_TYPE, mime.as_ref().to_string())], content.data).into_response())
    }
}
