use http::StatusCode;

/// Failure categories recognized by the platform
///
/// Each category owns a numeric error code that external clients key their
/// handling logic on. Codes are stable across releases and are never reused
/// for a different category; extending the platform means adding a new
/// variant with a fresh code, never touching an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No identity established for the request
    Unauthenticated,
    /// Referenced resource does not exist
    NotFound,
    /// Caller supplied parameters the operation does not recognize
    UnsupportedParameter,
    /// Request data failed domain validation
    Validation,
    /// Request body could not be parsed
    MalformedBody,
    /// Identity established but privilege missing
    NotAuthorized,
    /// Optimistic-lock or other concurrency conflict
    Conflict,
    /// Unmapped internal failure
    Internal,
}

impl ErrorCategory {
    /// Every category, for registry construction and taxonomy tests
    pub const ALL: [Self; 8] = [
        Self::Unauthenticated,
        Self::NotFound,
        Self::UnsupportedParameter,
        Self::Validation,
        Self::MalformedBody,
        Self::NotAuthorized,
        Self::Conflict,
        Self::Internal,
    ];

    /// Stable numeric error code for this category
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Unauthenticated => 1001,
            Self::NotFound => 1002,
            Self::UnsupportedParameter => 2001,
            Self::Validation => 2002,
            Self::MalformedBody => 2003,
            Self::NotAuthorized => 4003,
            Self::Conflict => 4009,
            Self::Internal => 5000,
        }
    }

    /// Default HTTP status carried by envelopes of this category
    ///
    /// Chosen for the closest standard HTTP semantic: 409 for lock
    /// conflicts, 403 for "authenticated but not authorized", 400 for
    /// anything the caller can fix by changing the request.
    #[must_use]
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UnsupportedParameter | Self::Validation | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::NotAuthorized => StatusCode::FORBIDDEN,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
