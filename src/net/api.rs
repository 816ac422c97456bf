//! REST helper for the status endpoint.
//!
//! Client-side (csr): real HTTP call via `gloo-net`.
//! Native builds: returns `StatusError::Unavailable` since the endpoint is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx, malformed body) maps to one
//! `StatusError` so the poller can degrade to "disconnected" uniformly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::StatusSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("status request failed: {0}")]
    Transport(String),
    #[error("status request returned {0}")]
    HttpStatus(u16),
    #[error("malformed status payload: {0}")]
    Malformed(String),
    #[error("status endpoint not available outside the browser")]
    Unavailable,
}

/// Whether an HTTP status code is a 2xx success.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a status response body.
///
/// # Errors
///
/// Returns `StatusError::Malformed` when the body is not a status snapshot.
pub fn parse_status_body(body: &str) -> Result<StatusSnapshot, StatusError> {
    serde_json::from_str(body).map_err(|e| StatusError::Malformed(e.to_string()))
}

/// Fetch one snapshot from `endpoint`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a
/// non-OK status, or the body does not match the snapshot schema.
pub async fn fetch_status(endpoint: &str) -> Result<StatusSnapshot, StatusError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| StatusError::Transport(e.to_string()))?;
        if !is_success(resp.status()) {
            return Err(StatusError::HttpStatus(resp.status()));
        }
        let body = resp.text().await.map_err(|e| StatusError::Transport(e.to_string()))?;
        parse_status_body(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _endpoint = endpoint;
        Err(StatusError::Unavailable)
    }
}
