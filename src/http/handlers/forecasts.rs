//! Forecast listing and forecast size handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::http::state::AppState;
use crate::upstream::{ForwardError, UpstreamRequest};

/// Routes served by this module, relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/get_forecasts/{model_code}", get(get_forecasts))
        .route("/get_forecast_size/{forecast_id}", get(get_forecast_size))
}

/// List the forecasts produced by one model.
///
/// # Parameters
///
/// - `state` - Application state holding the upstream client
/// - `model_code` - Upstream model identifier
///
/// # Returns
///
/// Returns the upstream JSON document unchanged, or the upstream error.
pub async fn get_forecasts(
    State(state): State<AppState>,
    Path(model_code): Path<String>,
) -> Result<Json<serde_json::Value>, ForwardError> {
    let request = UpstreamRequest::item("get_forecasts", &model_code);
    Ok(Json(state.upstream.get_json(&request).await?))
}

/// Describe the size of a forecast (number of images in its sequence).
///
/// # Parameters
///
/// - `state` - Application state holding the upstream client
/// - `forecast_id` - Opaque upstream forecast identifier
///
/// # Returns
///
/// Returns the upstream JSON document unchanged, or the upstream error.
pub async fn get_forecast_size(
    State(state): State<AppState>,
    Path(forecast_id): Path<String>,
) -> Result<Json<serde_json::Value>, ForwardError> {
    let request = UpstreamRequest::item("get_forecast_size", &forecast_id);
    Ok(Json(state.upstream.get_json(&request).await?))
}
