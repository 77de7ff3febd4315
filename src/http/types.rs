//! API types and parameters for HTTP handlers.

use serde::Deserialize;

/// Content type used for image bodies when the upstream does not report one.
pub const DEFAULT_IMAGE_CONTENT_TYPE: &str = "application/octet-stream";

/// Query parameters for the `/api/get_forecast_image/{forecast_id}` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ImageParams {
    /// Index of the image within the forecast sequence
    #[serde(default)]
    pub shift: i64,
}
