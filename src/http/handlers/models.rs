//! Model listing handler.

use axum::{extract::State, routing::get, Json, Router};

use crate::http::state::AppState;
use crate::upstream::{ForwardError, UpstreamRequest};

/// Routes served by this module, relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/models", get(get_models))
}

/// List the forecasting models known to the upstream.
///
/// # Returns
///
/// Returns the upstream JSON document unchanged, or the upstream error.
pub async fn get_models(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ForwardError> {
    let models = state.upstream.get_json(&UpstreamRequest::resource("models")).await?;
    Ok(Json(models))
}
