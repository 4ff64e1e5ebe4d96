//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`       - Health check: campaign store reachability
//! - `/api/campaigns/*`   - Campaign REST API
//! - `/*` (fallback)      - Static front-end bundle, when `STATIC_DIR` is set
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Cross-origin access for the browser client
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_allowed_origins` - origin allow-list; empty allows any origin
/// - `static_dir` - when set, unmatched paths are served from this directory,
///   falling back to its `index.html` for client-side routes
pub fn app_router(
    state: AppState,
    cors_allowed_origins: &[String],
    static_dir: Option<&str>,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(
        state,
        cors_allowed_origins,
        static_dir,
    ))
}

/// Routes and middleware without path normalization.
pub fn router(
    state: AppState,
    cors_allowed_origins: &[String],
    static_dir: Option<&str>,
) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::campaign_routes());

    if let Some(dir) = static_dir {
        let index = format!("{}/index.html", dir.trim_end_matches('/'));
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.with_state(state)
        .layer(cors::layer(cors_allowed_origins))
        .layer(tracing::layer())
}
