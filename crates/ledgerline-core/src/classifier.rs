//! Per-category failure classifiers and the mapper registry
//!
//! A classifier is a pure function from one failure to one envelope: no
//! logging, no I/O, identical output for identical input. The registry is
//! built once at process startup and read concurrently without locking; the
//! single warning-level diagnostic log per failure is emitted by
//! [`MapperRegistry::dispatch`], never by a classifier.

use std::collections::HashMap;

use crate::envelope::{ApiGlobalErrorResponse, ApiParameterError};
use crate::error::PlatformError;
use crate::taxonomy::ErrorCategory;

/// Pure translation from a failure to its client-facing envelope
pub type Classifier = fn(&PlatformError) -> ApiGlobalErrorResponse;

/// Globalisation code for aggregated validation envelopes
const VALIDATION_ERRORS_EXIST: &str = "validation.msg.validation.errors.exist";

/// Registry selecting the classifier for a caught failure
///
/// Immutable after construction; concurrent dispatch from simultaneously
/// handled requests is a pure read.
pub struct MapperRegistry {
    classifiers: HashMap<ErrorCategory, Classifier>,
}

impl MapperRegistry {
    /// Build the registry with every category mapped
    #[must_use]
    pub fn new() -> Self {
        let mut classifiers: HashMap<ErrorCategory, Classifier> = HashMap::new();
        classifiers.insert(ErrorCategory::Conflict, classify_conflict);
        classifiers.insert(ErrorCategory::NotAuthorized, classify_not_authorized);
        classifiers.insert(ErrorCategory::Unauthenticated, classify_unauthenticated);
        classifiers.insert(ErrorCategory::UnsupportedParameter, classify_unsupported_parameters);
        classifiers.insert(ErrorCategory::Validation, classify_validation);
        classifiers.insert(ErrorCategory::NotFound, classify_not_found);
        classifiers.insert(ErrorCategory::MalformedBody, classify_malformed_body);
        classifiers.insert(ErrorCategory::Internal, classify_internal);
        Self { classifiers }
    }

    /// Translate a failure into its envelope
    ///
    /// Emits exactly one warning-level log carrying the full failure detail,
    /// regardless of category or how many parameter errors the envelope
    /// aggregates. The envelope itself never carries diagnostic detail.
    /// Categories missing from the registry fall back to the generic
    /// internal classifier so no failure can escape unmapped.
    #[must_use]
    pub fn dispatch(&self, error: &PlatformError) -> ApiGlobalErrorResponse {
        tracing::warn!(error = ?error, category = ?error.category(), "request failed");

        self.classifiers
            .get(&error.category())
            .copied()
            .unwrap_or(classify_internal as Classifier)(error)
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Concurrency conflicts, with or without entity detail
fn classify_conflict(error: &PlatformError) -> ApiGlobalErrorResponse {
    match error {
        PlatformError::OptimisticLock { entity, identifier } => {
            ApiGlobalErrorResponse::conflict(entity, identifier.as_deref())
        }
        _ => ApiGlobalErrorResponse::conflict("lock", None),
    }
}

/// Authorization denial: the reason passes through unchanged
fn classify_not_authorized(error: &PlatformError) -> ApiGlobalErrorResponse {
    match error {
        PlatformError::NotAuthorized { reason } => ApiGlobalErrorResponse::unauthorized(reason.clone()),
        _ => ApiGlobalErrorResponse::internal_server_error(),
    }
}

fn classify_unauthenticated(_error: &PlatformError) -> ApiGlobalErrorResponse {
    ApiGlobalErrorResponse::unauthenticated()
}

/// One parameter error per offending name, order and duplicates preserved
fn classify_unsupported_parameters(error: &PlatformError) -> ApiGlobalErrorResponse {
    let PlatformError::UnsupportedParameters { parameters } = error else {
        return ApiGlobalErrorResponse::internal_server_error();
    };

    let errors = parameters
        .iter()
        .map(|name| {
            ApiParameterError::parameter_error(
                "error.msg.parameter.unsupported",
                format!("The parameter {name} is not supported."),
                name,
                Some(name.clone()),
            )
        })
        .collect();

    ApiGlobalErrorResponse::bad_client_request(VALIDATION_ERRORS_EXIST, "Validation errors exist.", errors)
}

fn classify_validation(error: &PlatformError) -> ApiGlobalErrorResponse {
    let PlatformError::Validation { errors } = error else {
        return ApiGlobalErrorResponse::internal_server_error();
    };
    ApiGlobalErrorResponse::bad_client_request(VALIDATION_ERRORS_EXIST, "Validation errors exist.", errors.clone())
}

fn classify_not_found(error: &PlatformError) -> ApiGlobalErrorResponse {
    match error {
        PlatformError::NotFound { resource, identifier } => {
            ApiGlobalErrorResponse::not_found(resource, identifier.as_deref())
        }
        _ => ApiGlobalErrorResponse::internal_server_error(),
    }
}

fn classify_malformed_body(error: &PlatformError) -> ApiGlobalErrorResponse {
    match error {
        PlatformError::MalformedBody { detail } => ApiGlobalErrorResponse::malformed_body(detail.clone()),
        _ => ApiGlobalErrorResponse::internal_server_error(),
    }
}

/// Fallback for unmapped categories: a generic structured 500
fn classify_internal(_error: &PlatformError) -> ApiGlobalErrorResponse {
    ApiGlobalErrorResponse::internal_server_error()
}
