//! Cross-cutting layers applied to the whole router.

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Wrap `router` with permissive CORS and per-request tracing.
///
/// The browser front end is served from a different origin, so any origin
/// may call the API.
pub fn apply(router: Router) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
