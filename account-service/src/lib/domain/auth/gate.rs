use std::sync::Arc;

use auth::PasswordHasher;
use auth::TokenCodec;
use auth::TokenType;
use chrono::Duration;

use crate::domain::auth::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

/// Freshly issued access/refresh token pair.
///
/// The two are always minted together; a refresh never reissues the access
/// token alone. The previous refresh token stays valid until its own expiry.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Authorization gate mapping bearer tokens to verified identities.
///
/// Owns the login, refresh, and bearer-authentication flows. Holds the
/// process-wide signing secret via the codec and the two independently
/// configured lifetimes: short for access tokens, long for refresh tokens.
/// A leaked refresh token is as dangerous as a password, hence the asymmetry.
pub struct AuthGate<R>
where
    R: UserRepository,
{
    repository: Arc<R>,
    codec: TokenCodec,
    password_hasher: PasswordHasher,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl<R> AuthGate<R>
where
    R: UserRepository,
{
    /// Create a new gate.
    ///
    /// # Arguments
    /// * `repository` - Account directory used for subject lookups
    /// * `secret` - Process-wide token signing secret
    /// * `access_ttl` - Access token lifetime (minutes-scale)
    /// * `refresh_ttl` - Refresh token lifetime (days-scale)
    pub fn new(
        repository: Arc<R>,
        secret: &[u8],
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            codec: TokenCodec::new(secret),
            password_hasher: PasswordHasher::new(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Verify credentials and mint a token pair.
    ///
    /// `identifier` may be a username or an email address. Unknown
    /// identifier, wrong password, and inactive account all fail with
    /// `InvalidCredentials` so a caller cannot probe account state.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Credentials do not resolve to an active account
    /// * `User` - Account directory failure
    /// * `TokenIssuance` - Signing failed
    pub async fn login(&self, identifier: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = self
            .repository
            .find_by_username_or_email(identifier)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| {
                AuthError::User(UserError::Unknown(format!(
                    "Password verification failed: {}",
                    e
                )))
            })?;

        if !is_valid {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            return Err(AuthError::InvalidCredentials);
        }

        self.issue_pair(&user.id)
    }

    /// Exchange a refresh-typed token for a new token pair.
    ///
    /// The presented token must verify and carry `type == refresh`; the
    /// subject must still resolve to an active account. The old refresh
    /// token is not invalidated.
    ///
    /// # Errors
    /// * `InvalidRefreshToken` - Token fails verification or is not refresh-typed
    /// * `InvalidToken` - Subject account is missing or inactive
    /// * `User` - Account directory failure
    /// * `TokenIssuance` - Signing failed
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self
            .codec
            .verify(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidRefreshToken);
        }

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidRefreshToken)?;

        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::InvalidToken);
        }

        self.issue_pair(&user.id)
    }

    /// Resolve an `Authorization` header value to a verified identity.
    ///
    /// Order: strip the `Bearer` scheme, verify the token, require an
    /// access-typed claim, look the subject up, and finally check the
    /// account is active. Every step before the active check fails with
    /// the uniform `InvalidToken`; an inactive account is the one case
    /// distinguished as `Inactive` so it can surface as 403.
    ///
    /// # Errors
    /// * `InvalidToken` - Header, token, type, or subject did not check out
    /// * `Inactive` - Valid access token for a deactivated account
    /// * `User` - Account directory failure
    pub async fn authenticate(&self, bearer_header_value: &str) -> Result<User, AuthError> {
        let token = bearer_header_value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::InvalidToken)?;

        let claims = self
            .codec
            .verify(token)
            .map_err(|_| AuthError::InvalidToken)?;

        // A refresh token must never authenticate a resource request
        if claims.token_type != TokenType::Access {
            return Err(AuthError::InvalidToken);
        }

        let user_id = UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::InvalidToken)?;

        if !user.is_active {
            return Err(AuthError::Inactive);
        }

        Ok(user)
    }

    /// Require superuser privilege on an already verified identity.
    ///
    /// # Errors
    /// * `PermissionDenied` - Identity is not a superuser
    pub fn authorize_superuser(user: &User) -> Result<(), AuthError> {
        if user.is_superuser {
            Ok(())
        } else {
            Err(AuthError::PermissionDenied)
        }
    }

    fn issue_pair(&self, id: &UserId) -> Result<TokenPair, AuthError> {
        let access_token = self
            .codec
            .issue(id, TokenType::Access, self.access_ttl)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;
        let refresh_token = self
            .codec
            .issue(id, TokenType::Refresh, self.refresh_ttl)
            .map_err(|e| AuthError::TokenIssuance(e.to_string()))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
