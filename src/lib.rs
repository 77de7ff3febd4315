//! # GIM TEC Forecast Proxy
//!
//! A thin HTTP reverse proxy in front of the GIM TEC forecast service.
//!
//! Every route maps one inbound request to a single upstream `GET`:
//! - **JSON routes**: models, forecasts, forecast size and metrics are decoded
//!   and re-encoded unchanged
//! - **Image route**: forecast images are streamed with the upstream content type
//! - **Errors**: upstream failures keep their status and text, transport
//!   failures become `500`
//!
//! # Examples
//!
//! ```no_run
//! use gim_proxy::{http::build_router, ProxyConfig};
//!
//! # async fn example() -> std::io::Result<()> {
//! let config = ProxyConfig::default();
//! let state = gim_proxy::http::AppState::from_config(&config)?;
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind(&config.listen).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod http;
pub mod upstream;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ProxyConfig};
pub use upstream::{ForwardError, UpstreamClient, UpstreamRequest};
