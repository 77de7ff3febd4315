//! Health check handler.

/// Health check endpoint.
///
/// # Returns
///
/// Returns "ok" if the server is up. The upstream is not contacted.
pub async fn healthz() -> &'static str {
    "ok"
}
