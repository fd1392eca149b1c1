//! Failure classification core for the Ledgerline platform API
//!
//! Every internal failure raised while processing a request is a
//! [`PlatformError`]. The [`MapperRegistry`] turns one into an
//! [`ApiGlobalErrorResponse`] — the stable JSON error contract clients key
//! their retry and display logic on. No HTTP framework dependency here; the
//! server crate owns the wire glue.

pub mod classifier;
pub mod envelope;
mod error;
mod taxonomy;

pub use classifier::MapperRegistry;
pub use envelope::{ApiGlobalErrorResponse, ApiParameterError};
pub use error::PlatformError;
pub use taxonomy::ErrorCategory;
