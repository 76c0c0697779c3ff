//! Route handlers for the canned and emission endpoints.
//!
//! The latency profiles (`/`, `/slow`, `/timeout`, `/500`) exist to give
//! request-log collectors predictable traffic shapes. `POST /` is the only
//! write path: it validates an emission request and hands it to the
//! dispatcher.

use crate::server::canned;
use crate::server::http::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use core::time::Duration;
use logsynth_core::{EmissionRequest, RawEmissionRequest, Result};
use rand::Rng;
use tokio::time::sleep;

/// Serves the canned document immediately.
pub async fn root() -> impl IntoResponse {
    Json(canned::DOCUMENT.clone())
}

/// Serves the canned document after an artificial 400-500 ms delay.
pub async fn slow() -> impl IntoResponse {
    artificial_delay(400, 500).await;
    Json(canned::DOCUMENT.clone())
}

/// Stalls long enough to trip client timeouts, then answers 408.
pub async fn timeout() -> StatusCode {
    sleep(Duration::from_secs(10)).await;
    StatusCode::REQUEST_TIMEOUT
}

/// Unconditional server-error profile.
pub async fn internal_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Accepts an emission request and hands it to the dispatcher.
///
/// Malformed bodies never reach the dispatcher: JSON and content-type
/// problems are rejected by the extractor, and rate/duration validation
/// happens here. Accepted requests may still wait in [`submit`] when the
/// queue is full.
///
/// [`submit`]: crate::server::dispatch::dispatcher::Dispatcher::submit
pub async fn submit_emission(
    State(state): State<AppState>,
    Json(raw): Json<RawEmissionRequest>,
) -> Result<StatusCode> {
    let request = EmissionRequest::try_from(raw)?;
    state.dispatcher.submit(request).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Sleeps for a uniformly random number of milliseconds in `[min_ms, max_ms]`.
async fn artificial_delay(min_ms: u64, max_ms: u64) {
    let wait = rand::rng().random_range(min_ms..=max_ms);
    sleep(Duration::from_millis(wait)).await;
}
