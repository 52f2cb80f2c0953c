use thiserror::Error;

/// Standard error type for the Chirpy core.
///
/// Every fallible operation returns one of these kinds; the HTTP layer (an
/// external collaborator) maps kinds to status codes via [`status_code`].
///
/// [`status_code`]: ChirpyError::status_code
#[derive(Debug, Error)]
pub enum ChirpyError {
    /// Filesystem fault while touching the backing file. Surfaced, not retried.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// The backing file holds malformed JSON. Surfaced, never swallowed.
    #[error("Decode error: {0}")]
    Decode(serde_json::Error),

    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Token has expired")]
    Expired,

    #[error("Refresh token has been revoked")]
    Revoked,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChirpyError {
    /// HTTP status code hint for this error. The HTTP layer is external to
    /// this crate, so the hint is a plain `u16`.
    pub fn status_code(&self) -> u16 {
        match self {
            ChirpyError::Storage(_) => 500,
            ChirpyError::Decode(_) => 500,
            ChirpyError::Encode(_) => 500,
            ChirpyError::NotFound(_) => 404,
            ChirpyError::Conflict(_) => 409,
            ChirpyError::Forbidden(_) => 403,
            ChirpyError::Unauthorized(_) => 401,
            ChirpyError::Validation(_) => 422,
            ChirpyError::Expired => 401,
            ChirpyError::Revoked => 401,
            ChirpyError::InvalidSignature => 401,
            ChirpyError::Malformed => 401,
            ChirpyError::Internal(_) => 500,
        }
    }

    /// Get the error code string for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChirpyError::Storage(_) => "STORAGE_ERROR",
            ChirpyError::Decode(_) => "DECODE_ERROR",
            ChirpyError::Encode(_) => "ENCODE_ERROR",
            ChirpyError::NotFound(_) => "NOT_FOUND",
            ChirpyError::Conflict(_) => "CONFLICT",
            ChirpyError::Forbidden(_) => "FORBIDDEN",
            ChirpyError::Unauthorized(_) => "UNAUTHORIZED",
            ChirpyError::Validation(_) => "VALIDATION_ERROR",
            ChirpyError::Expired => "TOKEN_EXPIRED",
            ChirpyError::Revoked => "TOKEN_REVOKED",
            ChirpyError::InvalidSignature => "INVALID_SIGNATURE",
            ChirpyError::Malformed => "MALFORMED_TOKEN",
            ChirpyError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
