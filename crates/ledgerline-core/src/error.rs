use thiserror::Error;

use crate::envelope::ApiParameterError;
use crate::taxonomy::ErrorCategory;

/// Failure raised anywhere inside the request-processing pipeline
///
/// The category and its payload are decided where the failure is raised, so
/// classification is a single exhaustive match instead of runtime type
/// probing. Values propagate by `Result` up to the dispatcher boundary,
/// where they are absorbed and translated into the client-facing contract.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Optimistic-lock conflict on a specific persistent entity
    #[error("optimistic lock conflict on {entity}")]
    OptimisticLock {
        /// Persistent entity type name, e.g. `Loan`
        entity: String,
        /// Identifier of the contended row, when the lock layer carries one
        identifier: Option<String>,
    },

    /// Concurrency conflict without entity detail
    #[error("concurrent modification detected")]
    Concurrency,

    /// Identity established, but the operation requires a privilege the
    /// caller does not hold
    ///
    /// Never raised for authentication failures; those are
    /// [`PlatformError::Unauthenticated`].
    #[error("not authorized: {reason}")]
    NotAuthorized {
        /// Human-readable reason set by the authorization layer, possibly
        /// naming the missing permission
        reason: String,
    },

    /// No identity established for the request
    #[error("authentication required")]
    Unauthenticated,

    /// Caller supplied parameters the target operation does not recognize
    #[error("unsupported parameters supplied")]
    UnsupportedParameters {
        /// Offending parameter names, in the order received
        parameters: Vec<String>,
    },

    /// Request data failed domain validation
    #[error("validation errors exist")]
    Validation { errors: Vec<ApiParameterError> },

    /// Referenced resource does not exist
    #[error("{resource} not found")]
    NotFound {
        resource: String,
        identifier: Option<String>,
    },

    /// Request body could not be parsed
    #[error("malformed request body: {detail}")]
    MalformedBody { detail: String },

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PlatformError {
    /// The taxonomy category this failure belongs to
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::OptimisticLock { .. } | Self::Concurrency => ErrorCategory::Conflict,
            Self::NotAuthorized { .. } => ErrorCategory::NotAuthorized,
            Self::Unauthenticated => ErrorCategory::Unauthenticated,
            Self::UnsupportedParameters { .. } => ErrorCategory::UnsupportedParameter,
            Self::Validation { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::MalformedBody { .. } => ErrorCategory::MalformedBody,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }
}
