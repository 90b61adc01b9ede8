use thiserror::Error;

use crate::user::errors::UserError;

/// Classified authentication and authorization failures.
///
/// Every expected condition is a value here, never a panic. Variants that
/// reach the client collapse into the uniform status mapping at the HTTP
/// boundary: bad credentials and every flavor of bad token are the same 401.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Bad credentials at login, including login against an inactive
    /// account; uniform so responses carry no account-state oracle
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Missing, malformed, forged, expired, or wrong-type bearer token,
    /// or a token whose subject no longer resolves to an account
    #[error("Could not validate credentials")]
    InvalidToken,

    /// Token presented to the refresh endpoint is not refresh-typed
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Valid token for an account that has been deactivated
    #[error("User is inactive")]
    Inactive,

    /// Valid identity without the required privilege
    #[error("Not enough permissions")]
    PermissionDenied,

    /// Token issuance failed; not an expected condition
    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    /// Account directory failure during an auth flow
    #[error(transparent)]
    User(#[from] UserError),
}
