//! Application state shared by all HTTP handlers.

use std::io;

use url::Url;

use crate::config::ProxyConfig;
use crate::upstream::UpstreamClient;

/// User agent sent on every upstream request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Application state shared across all HTTP handlers.
///
/// Holds nothing mutable; cloning it is cheap because `reqwest::Client`
/// shares its connection pool between clones.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Client for the upstream forecast service
    pub upstream: UpstreamClient,
}

impl AppState {
    /// Create new application state around an upstream client.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// Build application state from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream URL is invalid or the HTTP client cannot be built.
    pub fn from_config(config: &ProxyConfig) -> io::Result<Self> {
        let upstream_url = config
            .upstream_url()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Self::builder().with_upstream_url(upstream_url).build()
    }

    /// Get a builder for configuring application state step by step.
    ///
    /// # Returns
    ///
    /// Returns an `AppStateBuilder` for fluent configuration.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing AppState with fluent interface.
#[derive(Default)]
pub struct AppStateBuilder {
    upstream_url: Option<Url>,
    http_client: Option<reqwest::Client>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream base URL.
    ///
    /// # Parameters
    ///
    /// - `upstream_url` - Base URL every route is resolved against
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_upstream_url(mut self, upstream_url: Url) -> Self {
        self.upstream_url = Some(upstream_url);
        self
    }

    /// Use a preconfigured `reqwest` client instead of the default one.
    ///
    /// # Parameters
    ///
    /// - `client` - HTTP client to issue upstream requests with
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the final AppState with validation.
    ///
    /// # Errors
    ///
    /// Returns error if no upstream URL is set, if it cannot carry path
    /// segments, or if the default HTTP client fails to initialize.
    pub fn build(self) -> io::Result<AppState> {
        let upstream_url = self.upstream_url.ok_or(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Upstream URL is required for AppState",
        ))?;

        if upstream_url.cannot_be_a_base() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Upstream URL must be hierarchical, got: {upstream_url}"),
            ));
        }

        let http = match self.http_client {
            Some(client) => client,
            None => {
                reqwest::Client::builder().user_agent(USER_AGENT).build().map_err(io::Error::other)?
            }
        };

        Ok(AppState::new(UpstreamClient::new(upstream_url, http)))
    }
}
