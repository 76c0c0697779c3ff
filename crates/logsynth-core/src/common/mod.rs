//! Shared domain types for the synthetic log emission service.
//!
//! ## Structure
//!
//! - [`error`] - the unified [`Error`] type and [`Result`] alias.
//! - [`payload`] - fixed-length random payload identifiers.
//! - [`request`] - validated emission requests and cadence derivation.

pub mod error;
pub mod payload;
pub mod request;

pub use error::{Error, Result};
pub use payload::{EntropySource, OsEntropy, PAYLOAD_ID_LEN, PayloadId, PayloadSource};
pub use request::{EmissionRequest, MIN_CADENCE, RawEmissionRequest};
