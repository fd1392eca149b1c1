//! HTTP glue between the failure core and axum
//!
//! Feature routers receive the dispatcher through an `Extension` and call
//! [`ErrorDispatcher::respond`] on the error arm of their handlers, mirroring
//! the success arm's `Json(..)`. No failure escapes this boundary: every
//! `PlatformError` becomes a structured envelope, and anything the registry
//! does not recognize becomes a structured 500.

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use ledgerline_core::{MapperRegistry, PlatformError};

/// Request-failure boundary for the HTTP layer
///
/// Built once at startup, shared across all in-flight requests. Dispatch is
/// a pure read of the registry plus one diagnostic log write.
pub struct ErrorDispatcher {
    registry: MapperRegistry,
}

impl ErrorDispatcher {
    /// Build the dispatcher with the full classifier registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: MapperRegistry::new(),
        }
    }

    /// Absorb a failure and produce the client-facing response
    ///
    /// The HTTP status comes from the envelope; the body is the envelope
    /// serialized as JSON.
    #[must_use]
    pub fn respond(&self, error: &PlatformError) -> Response {
        let envelope = self.registry.dispatch(error);
        let status =
            StatusCode::from_u16(envelope.http_status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(envelope)).into_response()
    }
}

impl Default for ErrorDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
