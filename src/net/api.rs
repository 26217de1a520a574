//! REST helpers for the stats endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `Result`; the poll loop logs failures and carries on
//! with the next tick.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::stats::StatsSnapshot;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("stats request failed: {0}")]
    Transport(String),
    #[error("stats request returned status {0}")]
    Status(u16),
    #[error("stats response malformed: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// Fetch the current stats snapshot from `endpoint`.
///
/// # Errors
///
/// Returns [`StatsError`] on transport failure, a non-OK status, or a body
/// that does not match [`StatsSnapshot`].
pub async fn fetch_stats(endpoint: &str) -> Result<StatsSnapshot, StatsError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| StatsError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(StatsError::Status(resp.status()));
        }
        resp.json::<StatsSnapshot>()
            .await
            .map_err(|e| StatsError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = endpoint;
        Err(StatsError::Unavailable)
    }
}
