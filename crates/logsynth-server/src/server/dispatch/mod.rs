//! Emission request intake and execution.
//!
//! This module contains the scheduling half of the server: a bounded FIFO
//! queue of accepted emission requests, a single consumer task that starts
//! one detached emission task per request, and the emission loop itself.
//!
//! ## Structure
//!
//! - [`dispatcher`] - bounded intake queue and its consumer.
//! - [`emitter`] - the deadline-bounded, rate-limited emission loop.

pub mod dispatcher;
pub mod emitter;
