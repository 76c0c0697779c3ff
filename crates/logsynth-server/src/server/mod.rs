//! Server runtime: configuration, telemetry, dispatch, and the HTTP surface.
//!
//! ## Structure
//!
//! - [`config`] - CLI/env configuration.
//! - [`telemetry`] - log subscriber bootstrap.
//! - [`canned`] - the static response document.
//! - [`dispatch`] - emission request intake and the per-request emission loop.
//! - [`http`] - routing, handlers, and request logging.

pub mod canned;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod telemetry;
