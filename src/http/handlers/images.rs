//! Forecast image handler.
//!
//! Images are never buffered: the upstream body is handed to axum as a
//! stream, so the upstream connection stays open until the caller has read
//! the whole response.

use axum::{
    body::Body,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::debug;

use crate::http::state::AppState;
use crate::http::types::{ImageParams, DEFAULT_IMAGE_CONTENT_TYPE};
use crate::upstream::{ForwardError, UpstreamRequest};

/// Routes served by this module, relative to the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/get_forecast_image/{forecast_id}", get(get_forecast_image))
}

/// Stream one image of a forecast sequence.
///
/// # Parameters
///
/// - `state` - Application state holding the upstream client
/// - `forecast_id` - Opaque upstream forecast identifier
/// - `params` - Image selection; `shift` defaults to 0
///
/// # Returns
///
/// Returns the upstream bytes with the upstream content type, or the upstream error.
/// A `shift` that is not an integer yields 422 without contacting the upstream.
pub async fn get_forecast_image(
    State(state): State<AppState>,
    Path(forecast_id): Path<String>,
    params: Result<Query<ImageParams>, QueryRejection>,
) -> Result<Response, ForwardError> {
    let Query(params) = params?;
    let request =
        UpstreamRequest::item("get_forecast_image", &forecast_id).with_param("shift", params.shift);
    let upstream = state.upstream.get(&request).await?;

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_IMAGE_CONTENT_TYPE));
    debug!(%forecast_id, shift = params.shift, ?content_type, "streaming forecast image");

    Ok(([(header::CONTENT_TYPE, content_type)], Body::from_stream(upstream.bytes_stream()))
        .into_response())
}
