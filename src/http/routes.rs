//! HTTP routing configuration for all API endpoints.

use axum::{routing::get, Router};

use crate::http::handlers::{forecasts, healthz, images, metrics, models};
use crate::http::state::AppState;

/// Prefix every proxied route is mounted under.
pub const API_PREFIX: &str = "/api";

/// Build the Axum router with all API endpoints.
///
/// # Parameters
///
/// - `state` - Application state containing the upstream client
///
/// # Returns
///
/// Returns configured Axum `Router` with the proxy routes under [`API_PREFIX`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest(API_PREFIX, api_router())
        .with_state(state)
}

/// Compose the per-resource route groups into one router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(models::router())
        .merge(forecasts::router())
        .merge(images::router())
        .merge(metrics::router())
}
