use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token kind fixed at issuance.
///
/// Access tokens authorize ordinary requests and are short-lived; refresh
/// tokens are long-lived and usable only to mint new token pairs. The kind
/// is embedded in the signed payload so it cannot be swapped by the holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// Signed claim set carried by a bearer token.
///
/// Serialized field names follow RFC 7519 where a registered claim exists
/// (`sub`, `iat`, `exp`); the token kind travels as `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (account identifier)
    pub sub: String,

    /// Token kind, checked at every verification site
    #[serde(rename = "type")]
    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for `subject` expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier to encode as `sub`
    /// * `token_type` - Access or refresh
    /// * `ttl` - Lifetime of the token, must be positive
    ///
    /// # Returns
    /// Claims with `iat = now` and `exp = now + ttl`
    pub fn new(subject: impl ToString, token_type: TokenType, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Expiration as a UTC datetime.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Check whether the claims are expired at `current_timestamp`.
    ///
    /// Strict comparison: a token presented exactly at `exp` is still valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
