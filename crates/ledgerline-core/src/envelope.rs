//! Client-facing error envelope types
//!
//! Field names follow the published wire contract (camelCase globalisation
//! keys) that client tooling already depends on. Construction is pure and
//! total: no constructor can itself fail, including for absent identifiers
//! and empty parameter-error lists.

use http::StatusCode;
use serde::Serialize;

use crate::taxonomy::ErrorCategory;

/// One field-level validation failure inside an envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParameterError {
    /// Stable key for client-side message localization
    pub user_message_globalisation_code: String,
    /// Default English message shown when no localization exists
    pub default_user_message: String,
    /// Name of the failing request parameter
    pub parameter_name: String,
    /// Offending value as received, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ApiParameterError {
    /// Build one parameter error entry
    #[must_use]
    pub fn parameter_error(
        globalisation_code: impl Into<String>,
        default_message: impl Into<String>,
        parameter_name: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            user_message_globalisation_code: globalisation_code.into(),
            default_user_message: default_message.into(),
            parameter_name: parameter_name.into(),
            value,
        }
    }
}

/// The structured JSON error body returned to the client
///
/// Constructed fresh per failed request, serialized into the response body,
/// then discarded. Diagnostic detail (stack traces, internal identifiers)
/// never enters an envelope; it lives in server-side logs only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGlobalErrorResponse {
    /// HTTP status the response carrying this envelope must use
    pub http_status_code: u16,
    /// Stable key for client-side message localization
    pub user_message_globalisation_code: String,
    /// Default English message shown when no localization exists
    pub default_user_message: String,
    /// Field-level failures, in the order they were detected
    pub errors: Vec<ApiParameterError>,
}

impl ApiGlobalErrorResponse {
    fn new(
        status: StatusCode,
        globalisation_code: impl Into<String>,
        default_message: impl Into<String>,
        errors: Vec<ApiParameterError>,
    ) -> Self {
        Self {
            http_status_code: status.as_u16(),
            user_message_globalisation_code: globalisation_code.into(),
            default_user_message: default_message.into(),
            errors,
        }
    }

    /// 409 envelope for an optimistic-lock or concurrency conflict
    ///
    /// The lock layer does not always know the contended identifier, so the
    /// message tolerates a missing one.
    #[must_use]
    pub fn conflict(resource: &str, identifier: Option<&str>) -> Self {
        let message = identifier.map_or_else(
            || format!("The {resource} is locked by another operation and cannot be modified."),
            |id| format!("The {resource} with identifier {id} is locked by another operation and cannot be modified."),
        );
        Self::new(
            ErrorCategory::Conflict.default_status(),
            "error.msg.resource.conflict",
            message,
            Vec::new(),
        )
    }

    /// 403 envelope for an authorization denial
    ///
    /// The message is taken verbatim from the authorization layer — it may
    /// carry context the client needs, so it is never re-worded.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::NotAuthorized.default_status(),
            "error.msg.not.authorized",
            message,
            Vec::new(),
        )
    }

    /// 401 envelope for a request without an established identity
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(
            ErrorCategory::Unauthenticated.default_status(),
            "error.msg.not.authenticated",
            "Authentication is required to access this resource.",
            Vec::new(),
        )
    }

    /// 400 envelope aggregating field-level validation failures
    #[must_use]
    pub fn bad_client_request(
        globalisation_code: impl Into<String>,
        default_message: impl Into<String>,
        errors: Vec<ApiParameterError>,
    ) -> Self {
        Self::new(StatusCode::BAD_REQUEST, globalisation_code, default_message, errors)
    }

    /// 404 envelope for a missing resource
    #[must_use]
    pub fn not_found(resource: &str, identifier: Option<&str>) -> Self {
        let message = identifier.map_or_else(
            || format!("The requested {resource} does not exist."),
            |id| format!("The {resource} with identifier {id} does not exist."),
        );
        Self::new(
            ErrorCategory::NotFound.default_status(),
            "error.msg.resource.not.found",
            message,
            Vec::new(),
        )
    }

    /// 400 envelope for an unparseable request body
    #[must_use]
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCategory::MalformedBody.default_status(),
            "error.msg.request.body.malformed",
            detail,
            Vec::new(),
        )
    }

    /// 500 envelope for an unmapped internal failure
    ///
    /// Deliberately generic: whatever went wrong stays in the logs.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::new(
            ErrorCategory::Internal.default_status(),
            "error.msg.platform.server.side.error",
            "An unexpected error occurred on the platform server.",
            Vec::new(),
        )
    }
}
