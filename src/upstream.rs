//! Outbound client for the upstream forecast service.
//!
//! Every proxy route is a single `GET` against the upstream. This module builds
//! those URLs, performs the call and maps the outcome to a [`ForwardError`]
//! that handlers can return directly.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error, warn};
use url::{form_urlencoded, Url};

/// Failure while forwarding a request upstream.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Upstream answered with a status other than 200.
    #[error("upstream returned {status}: {body}")]
    Upstream {
        /// Status code reported by the upstream.
        status: StatusCode,
        /// Raw upstream response text.
        body: String,
    },
    /// Connection, protocol or body decoding failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// Base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("upstream base URL cannot be a base: {0}")]
    InvalidUrl(String),
    /// Identifier would be dropped or resolved away by URL normalisation.
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    /// Query parameters failed type coercion; nothing was sent upstream.
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream { status, body } => (status, body).into_response(),
            Self::InvalidIdentifier(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            Self::InvalidQuery(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()).into_response()
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response(),
        }
    }
}

/// A read-only request against the upstream service.
///
/// Path segments are appended to the base URL one by one, so identifiers
/// containing `/` or `?` stay inside their own segment. The dot segments `.`
/// and `..` are rejected when the URL is resolved instead of being silently
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamRequest {
    segments: Vec<String>,
    query: Option<String>,
}

impl UpstreamRequest {
    /// Request for a fixed resource with no identifier, e.g. `models`.
    pub fn resource(name: &str) -> Self {
        Self { segments: vec![name.to_string()], query: None }
    }

    /// Request for `{route}/{id}`.
    pub fn item(route: &str, id: &str) -> Self {
        Self { segments: vec![route.to_string(), id.to_string()], query: None }
    }

    /// Append a form-encoded query pair.
    pub fn with_param(mut self, key: &str, value: impl ToString) -> Self {
        let existing = self.query.take().unwrap_or_default();
        let mut serializer = form_urlencoded::Serializer::new(existing);
        serializer.append_pair(key, &value.to_string());
        self.query = Some(serializer.finish());
        self
    }

    /// Use `raw` as the query string as the caller sent it.
    ///
    /// The string is not parsed or re-serialized. `Url` still percent-encodes
    /// characters outside its query set (e.g. `'` becomes `%27`); everything
    /// already valid in a query passes through unchanged.
    pub fn with_raw_query(mut self, raw: Option<String>) -> Self {
        self.query = raw;
        self
    }
}

/// HTTP client bound to one upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    base: Url,
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Create a client for `base` using the given `reqwest` client.
    pub fn new(base: Url, http: reqwest::Client) -> Self {
        Self { base, http }
    }

    /// Base URL all requests are resolved against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve `request` into an absolute upstream URL.
    ///
    /// # Errors
    ///
    /// - `ForwardError::InvalidUrl` if the base URL cannot carry a path
    /// - `ForwardError::InvalidIdentifier` for a `.` or `..` segment
    pub fn url_for(&self, request: &UpstreamRequest) -> Result<Url, ForwardError> {
        if let Some(dot) = request.segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(ForwardError::InvalidIdentifier(dot.clone()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ForwardError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(&request.segments);
        url.set_query(request.query.as_deref());
        Ok(url)
    }

    /// Issue a `GET` and return the response if the upstream answered 200.
    ///
    /// # Errors
    ///
    /// - `ForwardError::Upstream` carrying status and text for any other status
    /// - `ForwardError::Transport` if the request or reading the error body fails
    pub async fn get(&self, request: &UpstreamRequest) -> Result<reqwest::Response, ForwardError> {
        let url = self.url_for(request)?;
        debug!(%url, "forwarding request upstream");

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            error!(%url, error = %e, "upstream request failed");
            ForwardError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.map_err(|e| {
                error!(%url, %status, error = %e, "failed to read upstream error body");
                ForwardError::Transport(e)
            })?;
            warn!(%url, %status, "upstream returned an error");
            return Err(ForwardError::Upstream { status, body });
        }

        Ok(response)
    }

    /// Issue a `GET` and decode the 200 response body as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::get`], plus `ForwardError::Transport` if the
    /// body is not valid JSON.
    pub async fn get_json(
        &self,
        request: &UpstreamRequest,
    ) -> Result<serde_json::Value, ForwardError> {
        let response = self.get(request).await?;
        response.json::<serde_json::Value>().await.map_err(|e| {
            error!(error = %e, "failed to decode upstream JSON");
            ForwardError::Transport(e)
        })
    }
}
