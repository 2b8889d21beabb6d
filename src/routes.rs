//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`           - Health check: Keystone reachability (public)
//! - `/api/keystone/*`        - Keystone resources (token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Keystone token, validated per request
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitLayer;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with state and authentication, without transport concerns.
///
/// Integration tests drive this router directly.
pub fn api_router(state: AppState) -> Router {
    let keystone_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/keystone", keystone_router)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit` - per-IP limiter applied to every route
pub fn app_router(state: AppState, rate_limit: RateLimitLayer) -> NormalizePath<Router> {
    let router = api_router(state)
        .layer(rate_limit)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
