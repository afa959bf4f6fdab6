//! PWA Routes
//!
//! GET /manifest.webmanifest - the web app manifest, derived from the
//! shipped PWA configuration. Ungated: browsers fetch it before any
//! session exists.

use axum::{http::header, response::IntoResponse, Json};

use crate::pwa::web_manifest;

/// GET /manifest.webmanifest
pub async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(web_manifest()),
    )
}
