use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::TokenClaims;
use super::claims::TokenType;
use super::errors::TokenError;

/// Codec for signed bearer tokens.
///
/// Encodes and decodes [`TokenClaims`] as HS256 JWTs. The signature covers
/// the full claim payload, so a single byte change anywhere invalidates it.
/// Signature verification happens before the expiry check; expiry is strict
/// with zero clock-skew leeway.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a new codec with a process-wide secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Returns
    /// TokenCodec instance configured with HS256 algorithm
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for `subject` expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier to encode as `sub`
    /// * `token_type` - Access or refresh, fixed for the token's lifetime
    /// * `ttl` - Token lifetime, must be positive
    ///
    /// # Returns
    /// Opaque bearer string
    ///
    /// # Errors
    /// * `NonPositiveLifetime` - `ttl` is zero or negative
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(
        &self,
        subject: impl ToString,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        if ttl <= Duration::zero() {
            return Err(TokenError::NonPositiveLifetime);
        }
        self.encode(&TokenClaims::new(subject, token_type, ttl))
    }

    /// Encode a claim set into a signed token.
    ///
    /// # Arguments
    /// * `claims` - Claims to sign
    ///
    /// # Returns
    /// Opaque bearer string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and verify a bearer token.
    ///
    /// The signature is checked over the full payload first; only a token
    /// with a valid signature is then checked for expiry, so a forged token
    /// never leaks whether its claimed expiry has passed.
    ///
    /// # Arguments
    /// * `token` - Bearer string to verify
    ///
    /// # Returns
    /// Verified claims
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed
    /// * `InvalidSignature` - Signature does not match the payload
    /// * `Expired` - Signature is valid but `exp` has passed
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // No clock-skew tolerance: expiry is strict
        validation.leeway = 0;

        let token_data =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
