//! Fixed-length random payload identifiers.
//!
//! Every emitted log record carries an opaque identifier so downstream
//! pipelines can deduplicate and count lines. Identifiers are
//! [`PAYLOAD_ID_LEN`] bytes of system randomness, rendered as lowercase hex.
//!
//! Randomness is obtained through the [`EntropySource`] seam. Production code
//! uses [`OsEntropy`]; tests substitute deterministic or failing sources.

use crate::common::error::{Error, Result};
use core::fmt;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// The number of random bytes in a [`PayloadId`].
pub const PAYLOAD_ID_LEN: usize = 10;

/// A source of raw random bytes.
///
/// Implementations may be called concurrently from any number of tasks
/// without coordination.
pub trait EntropySource {
    /// Fills `buf` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] when the underlying facility cannot supply
    /// bytes. The failure is fatal to the caller's current unit of work, not
    /// to the process.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// System entropy via the operating system RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(buf).map_err(|e| Error::Entropy {
            reason: e.to_string(),
        })
    }
}

/// A fixed-length opaque identifier attached to one emitted record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadId([u8; PAYLOAD_ID_LEN]);

impl PayloadId {
    /// Returns the raw identifier bytes.
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_ID_LEN] {
        &self.0
    }
}

impl fmt::Display for PayloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PayloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PayloadId({self})")
    }
}

/// Produces [`PayloadId`]s from an [`EntropySource`].
///
/// Stateless beyond its entropy handle; a single clone-per-task is cheap and
/// requires no locking.
#[derive(Clone, Copy, Debug, Default)]
pub struct PayloadSource<E = OsEntropy> {
    entropy: E,
}

impl PayloadSource {
    /// Creates a source backed by the operating system RNG.
    pub const fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> PayloadSource<E> {
    /// Creates a source backed by the given entropy implementation.
    pub const fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns the next payload identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the entropy source fails.
    pub fn try_next_id(&self) -> Result<PayloadId> {
        let mut buf = [0_u8; PAYLOAD_ID_LEN];
        self.entropy.fill(&mut buf)?;
        Ok(PayloadId(buf))
    }
}
