//! Validated emission requests and cadence derivation.
//!
//! A request arrives over the wire as [`RawEmissionRequest`] and is promoted
//! to [`EmissionRequest`] only if its fields validate. Code past the HTTP
//! boundary never sees an unvalidated rate or lifetime.

use crate::common::error::{Error, Result};
use core::time::Duration;
use serde::Deserialize;

/// Minimum inter-tick delay.
///
/// A cadence of `1s / rate` rounds toward zero for very large rates, which
/// would turn the emission loop into a busy spin. Rates above 1000/s are
/// floored to one tick per millisecond instead.
pub const MIN_CADENCE: Duration = Duration::from_millis(1);

/// Wire form of an emission request, as posted to the server.
///
/// ```json
/// { "duration": "30s", "rate": 5 }
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct RawEmissionRequest {
    /// Requested emission lifetime, e.g. `"30s"` or `"5m"`.
    pub duration: String,
    /// Emissions per second.
    pub rate: i64,
}

/// A validated request for synthetic log emission.
///
/// Immutable once constructed; consumed exactly once by the dispatcher, which
/// turns it into a running emission task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmissionRequest {
    lifetime: Duration,
    rate: i64,
}

impl EmissionRequest {
    /// Validates a lifetime and rate into an [`EmissionRequest`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the lifetime is zero or the rate
    /// is not positive. A zero rate makes the cadence undefined; a negative
    /// rate has no meaningful schedule.
    pub fn new(lifetime: Duration, rate: i64) -> Result<Self> {
        if lifetime.is_zero() {
            return Err(Error::InvalidRequest {
                reason: "duration must be positive".to_string(),
            });
        }
        if rate < 1 {
            return Err(Error::InvalidRequest {
                reason: format!("rate must be positive, got {rate}"),
            });
        }
        Ok(Self { lifetime, rate })
    }

    /// How long the emission task stays active.
    pub const fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Emissions per second.
    pub const fn rate(&self) -> i64 {
        self.rate
    }

    /// The fixed inter-tick delay: one second divided by the rate, floored at
    /// [`MIN_CADENCE`].
    pub fn cadence(&self) -> Duration {
        // rate is validated >= 1, so the division is defined and fits u64.
        let nanos = 1_000_000_000_i64 / self.rate;
        Duration::from_nanos(nanos as u64).max(MIN_CADENCE)
    }
}

impl TryFrom<RawEmissionRequest> for EmissionRequest {
    type Error = Error;

    fn try_from(raw: RawEmissionRequest) -> Result<Self> {
        let lifetime = humantime::parse_duration(&raw.duration).map_err(|e| {
            Error::InvalidRequest {
                reason: format!("invalid duration format: {e}"),
            }
        })?;
        Self::new(lifetime, raw.rate)
    }
}
