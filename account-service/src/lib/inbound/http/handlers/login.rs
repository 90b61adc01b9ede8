use axum::extract::State;
use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::gate::TokenPair;
use crate::inbound::http::router::AppState;
use crate::user::ports::UserRepository;

/// Login with the OAuth2 password-grant form shape.
///
/// The `username` field accepts either a username or an email address.
pub async fn login<R>(
    State(state): State<AppState<R>>,
    Form(body): Form<LoginRequestBody>,
) -> Result<ApiSuccess<TokenPairResponse>, ApiError>
where
    R: UserRepository,
{
    state
        .auth_gate
        .login(&body.username, &body.password)
        .await
        .map_err(ApiError::from)
        .map(|pair| ApiSuccess::new(StatusCode::OK, pair.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    /// Username or email address
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}
