//! HTTP handlers, one module per upstream resource family.

pub mod forecasts;
pub mod health;
pub mod images;
pub mod metrics;
pub mod models;

// Re-export handlers for easier access
pub use forecasts::{get_forecast_size, get_forecasts};
pub use health::healthz;
pub use images::get_forecast_image;
pub use metrics::get_metrics;
pub use models::get_models;

/// State pointing at an arbitrary upstream base URL.
#[cfg(test)]
pub(crate) fn state_for_base(base: &str) -> crate::http::state::AppState {
    let url = url::Url::parse(base).expect("valid url");
    crate::http::state::AppState::builder()
        .with_upstream_url(url)
        .build()
        .expect("valid configuration")
}

/// State pointing at a mock upstream mounted under `/gim-tec-forecast`.
#[cfg(test)]
pub(crate) fn test_state(server: &wiremock::MockServer) -> crate::http::state::AppState {
    state_for_base(&format!("{}/gim-tec-forecast", server.uri()))
}
