use thiserror::Error;

/// Error type for token operations.
///
/// `Malformed` and `InvalidSignature` are distinct for logging, but callers
/// must surface them identically to clients so a forged token cannot be told
/// apart from a garbled one.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token lifetime must be positive")]
    NonPositiveLifetime,
}
