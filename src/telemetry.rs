//! # Observability & Tracing
//!
//! The library emits `tracing` events and never installs a subscriber on its own.
//! Applications and tests that want to see them call [`setup_tracing`].
//!
//! ## What Gets Traced
//!
//! - **Request building** at `trace` level: entity type and the identifiers set.
//! - **Failed outcomes** at `debug` level, when a response is turned into a `Result`.
//! - **Mock traffic** at `debug` level: every request served by `MockHandler`.
//!
//! The entity type is recorded as the `entity_type` field using its short name
//! (`User` rather than `my_app::model::User`).
//!
//! ## Usage Examples
//!
//! ```bash
//! # Failures and mock traffic
//! RUST_LOG=request_builder=debug cargo test
//!
//! # Every built request as well
//! RUST_LOG=request_builder=trace cargo test
//! ```

use thiserror::Error;

/// Errors from installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already set, or the filter could not be built.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
///
/// Returns an error instead of panicking when a global subscriber already exists, so
/// it is safe to call from several tests.
pub fn setup_tracing() -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| TelemetryError::Install(e.to_string()))
}
