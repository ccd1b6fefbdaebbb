//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                   - Health check (public)
//! - `GET /api/courses*`             - Catalog reads (public, rate limited)
//! - `POST|PUT|DELETE /api/courses*` - Admin mutations (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on admin routes
//! - **Authentication** - Bearer token on mutation routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, limits: RateLimitSettings) -> NormalizePath<Router> {
    let admin_router = api::routes::admin_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::layer(
            limits.admin_per_second,
            limits.admin_burst,
        ));

    let public_router = api::routes::public_routes().layer(rate_limit::layer(
        limits.public_per_second,
        limits.public_burst,
    ));

    let api_router = Router::new().merge(admin_router).merge(public_router);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
