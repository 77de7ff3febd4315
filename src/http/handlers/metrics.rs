//! Forecast quality metrics handler.

use axum::{
    extract::{Path, RawQuery, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use crate::http::state::AppState;
use crate::upstream::{ForwardError, UpstreamRequest};

/// Routes served by this module, relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/get_metrics/{model_code}", get(get_metrics))
}

/// Fetch quality metrics for a model.
///
/// The inbound query string is not parsed or re-serialized; it is forwarded
/// unchanged apart from URL normalisation (characters such as `'` get
/// percent-encoded).
///
/// # Parameters
///
/// - `state` - Application state holding the upstream client
/// - `model_code` - Upstream model identifier
/// - `query` - Raw inbound query string, if any
///
/// # Returns
///
/// Returns the upstream JSON document unchanged, or the upstream error.
pub async fn get_metrics(
    State(state): State<AppState>,
    Path(model_code): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<serde_json::Value>, ForwardError> {
    info!(%model_code, query = query.as_deref().unwrap_or(""), "fetching metrics");

    let request = UpstreamRequest::item("get_metrics", &model_code).with_raw_query(query);
    match state.upstream.get_json(&request).await {
        Ok(metrics) => Ok(Json(metrics)),
        Err(e) => {
            warn!(%model_code, error = %e, "metrics request failed");
            Err(e)
        }
    }
}
