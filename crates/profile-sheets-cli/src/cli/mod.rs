//! Process-level concerns of the binary.
//!
//! - [`config`] - CLI/environment parsing and validation.
//! - [`telemetry`] - log subscriber and optional OpenTelemetry export.

pub mod config;
pub mod telemetry;
