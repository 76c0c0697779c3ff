//! The per-request emission loop.
//!
//! Each accepted [`EmissionRequest`] becomes one call to [`emission_loop`],
//! running as a detached task. The loop owns its deadline and cadence
//! exclusively; nothing outside the task can stop it, and it holds no handle
//! back to the dispatcher.

use crate::server::canned;
use logsynth_core::{EmissionRequest, EntropySource, PayloadSource};
use tokio::time::{Instant, sleep};

/// Runs one emission task to completion.
///
/// The absolute deadline is captured on entry. Each iteration re-checks the
/// deadline, emits one structured record, and sleeps one cadence, so the task
/// runs for at least the requested lifetime and at most one cadence past it.
///
/// Entropy failure is fatal to this task alone: one error-level record is
/// emitted and the loop returns. Other tasks and the dispatcher are
/// unaffected.
pub async fn emission_loop<E: EntropySource>(request: EmissionRequest, source: PayloadSource<E>) {
    let deadline = Instant::now() + request.lifetime();
    let cadence = request.cadence();
    let extra = &*canned::DOCUMENT;

    loop {
        if Instant::now() >= deadline {
            break;
        }

        let id = match source.try_next_id() {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(error = %e, "payload generation failed, stopping emission task");
                return;
            }
        };

        tracing::info!(
            id = %id,
            extra = %extra,
            "some random fake data for log testing"
        );

        sleep(cadence).await;
    }

    tracing::debug!(rate = request.rate(), "emission task reached its deadline");
}
